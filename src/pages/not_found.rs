use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page" style="padding: 8rem 2rem; text-align: center;">
            <h1>{"Página no encontrada"}</h1>
            <p>{"La página que buscas no existe o ha cambiado de dirección."}</p>
            <Link<Route> to={Route::ComoFunciona}>
                {"Ver cómo funciona el servicio"}
            </Link<Route>>
        </div>
    }
}
