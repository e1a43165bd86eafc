//! Current-readings page: one card per named parameter.

use common::model::parameter::Parameter;
use yew::{html, Component, Context, Html};

use crate::api;

pub enum Msg {
    Loaded(Result<Vec<Parameter>, String>),
}

pub struct ParameterCards {
    parameters: Vec<Parameter>,
    error: Option<String>,
    loading: bool,
}

impl Component for ParameterCards {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link()
            .send_future(async { Msg::Loaded(api::fetch_parameters().await) });
        Self {
            parameters: Vec::new(),
            error: None,
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(parameters)) => {
                self.parameters = parameters;
                self.loading = false;
            }
            Msg::Loaded(Err(e)) => {
                self.error = Some(e);
                self.loading = false;
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <h2>{ "Lectures actuals" }</h2>
                if let Some(error) = &self.error {
                    <div class="error">{ format!("No s'han pogut carregar les dades: {error}") }</div>
                }
                if self.loading {
                    <p>{ "Carregant..." }</p>
                }
                <div class="cards">
                    {
                        for self.parameters.iter().map(|param| html! {
                            <div class="card">
                                <h3>{ &param.name }</h3>
                                <div class="value">{ &param.value }</div>
                                <div class="updated">{ format!("Actualitzat: {}", param.updated_at) }</div>
                            </div>
                        })
                    }
                </div>
            </div>
        }
    }
}
