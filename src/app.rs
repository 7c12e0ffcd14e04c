// ============================================================================
// APP - Componente raíz: router + tabla de rutas
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    let basename = CONFIG.router_basename().map(AttrValue::from);

    html! {
        <BrowserRouter {basename}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
