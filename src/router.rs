// ============================================================================
// ROUTER - Tabla de rutas estática
// ============================================================================
// Una ruta de nivel superior (`public`, layout por defecto) que anida una
// sola ruta hija (`home`). Sin guards, redirects ni 404 propios: lo que no
// coincide lo resuelve yew-router (no pinta nada).
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::layouts::DefaultLayout;
use crate::views::HomeView;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
}

impl Route {
    /// Nombre del registro hoja en la tabla
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteComponent {
    DefaultLayout,
    HomeView,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub name: &'static str,
    pub path: &'static str,
    pub component: RouteComponent,
    pub children: &'static [RouteRecord],
}

static ROUTES: &[RouteRecord] = &[RouteRecord {
    name: "public",
    path: "/",
    component: RouteComponent::DefaultLayout,
    children: &[RouteRecord {
        name: "home",
        path: "/",
        component: RouteComponent::HomeView,
        children: &[],
    }],
}];

pub fn route_table() -> &'static [RouteRecord] {
    ROUTES
}

/// Cadena de registros (layout primero, hoja al final) para una ruta.
/// Vacía si la ruta no figura en la tabla.
pub fn resolve(route: &Route) -> Vec<&'static RouteRecord> {
    find_chain(route_table(), route.name()).unwrap_or_default()
}

fn find_chain(records: &'static [RouteRecord], name: &str) -> Option<Vec<&'static RouteRecord>> {
    for record in records {
        if record.children.is_empty() {
            if record.name == name {
                return Some(vec![record]);
            }
            continue;
        }
        if let Some(mut chain) = find_chain(record.children, name) {
            chain.insert(0, record);
            return Some(chain);
        }
    }
    None
}

/// Render de `<Switch<Route>>`: anida cada componente dentro de su padre
pub fn switch(route: Route) -> Html {
    let chain = resolve(&route);
    if chain.is_empty() {
        log::warn!("⚠️ [ROUTER] Ruta sin registro en la tabla: {:?}", route);
        return Html::default();
    }

    chain
        .iter()
        .rev()
        .fold(Html::default(), |inner, record| render_component(record.component, inner))
}

fn render_component(component: RouteComponent, inner: Html) -> Html {
    match component {
        RouteComponent::DefaultLayout => html! {
            <DefaultLayout>{inner}</DefaultLayout>
        },
        RouteComponent::HomeView => html! { <HomeView /> },
    }
}
