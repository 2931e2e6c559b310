use yew::prelude::*;
use yew_router::prelude::*;

use super::como_funciona::catalog_or_empty;
use super::not_found::NotFound;
use crate::service_flow::stage::find_by_link;
use crate::service_flow::stage_icon::StageIcon;
use crate::service_flow::options::VisualStyle;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServicePageProps {
    /// Route path, matched against each stage's `link_to`.
    pub path: String,
}

#[function_component(ServicePage)]
pub fn service_page(props: &ServicePageProps) -> Html {
    let stages = use_memo(|_| catalog_or_empty(), ());

    let Some(stage) = find_by_link(&stages, &props.path) else {
        log::warn!("No stage links to {}", props.path);
        return html! { <NotFound /> };
    };

    html! {
        <div class="service-page">
            <section class="service-hero" style={format!("--stage-accent: var(--color-{});", stage.color)}>
                <StageIcon stage_number={stage.number} is_active={true} visual_style={VisualStyle::Modern} />
                <p class="service-step">{format!("Etapa {} de {}", stage.number, stages.len())}</p>
                <h1>{&stage.title}</h1>
                <p class="service-description">{&stage.description}</p>
                <p class="service-price">{&stage.price}</p>
            </section>
            {
                if stage.features().is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class="service-features">
                            <h2>{"Qué incluye"}</h2>
                            <ul>
                                { for stage.features().iter().map(|feature| html! { <li>{feature}</li> }) }
                            </ul>
                        </section>
                    }
                }
            }
            <Link<Route> to={Route::ComoFunciona} classes="service-back">
                {"← Volver a cómo funciona"}
            </Link<Route>>

            <style>
                {r#"
                .service-page {
                    padding: 8rem 2rem 4rem;
                    max-width: 800px;
                    margin: 0 auto;
                    color: #1f2933;
                }

                .service-hero {
                    border-top: 4px solid var(--stage-accent);
                    padding-top: 2rem;
                }

                .service-step {
                    color: #52606d;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }

                .service-price {
                    font-size: 1.4rem;
                    font-weight: bold;
                }

                .service-back {
                    display: inline-block;
                    margin-top: 2rem;
                    color: #2563eb;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
