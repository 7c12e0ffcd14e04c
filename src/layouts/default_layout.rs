use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct DefaultLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Marco persistente: header con navegación + contenido anidado
#[function_component(DefaultLayout)]
pub fn default_layout(props: &DefaultLayoutProps) -> Html {
    html! {
        <div class="app-layout">
            <header class="app-header">
                <h1>{ CONFIG.app_title.clone() }</h1>
                <nav class="app-nav">
                    <Link<Route> to={Route::Home} classes={classes!("nav-link")}>{"Home"}</Link<Route>>
                </nav>
            </header>
            <main class="app-main">
                { for props.children.iter() }
            </main>
        </div>
    }
}
