//! Root component: top navigation plus the active page.
//!
//! Page switching is plain component state; with four fixed pages a router
//! dependency buys nothing. Every navigation fires an anonymous visit ping
//! for the statistics dashboard.

use yew::{html, Component, Context, Html};

use crate::api;
use crate::components::admin_panel::AdminPanel;
use crate::components::navbar::Navbar;
use crate::components::parameter_cards::ParameterCards;
use crate::components::samples_table::SamplesTable;
use crate::components::submit_form::SubmitForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Browse,
    Submit,
    Admin,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Inici",
            Page::Browse => "Mostres",
            Page::Submit => "Envia una mostra",
            Page::Admin => "Administració",
        }
    }

    fn track_key(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Browse => "/browse",
            Page::Submit => "/submit",
            Page::Admin => "/admin",
        }
    }
}

pub enum Msg {
    Navigate(Page),
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        api::track_visit(Page::Home.track_key());
        Self { page: Page::Home }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                if self.page != page {
                    self.page = page;
                    api::track_visit(page.track_key());
                    return true;
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);
        html! {
            <div>
                <Navbar active={self.page} {on_navigate} />
                <div class="page">
                    {
                        match self.page {
                            Page::Home => html! { <ParameterCards /> },
                            Page::Browse => html! { <SamplesTable /> },
                            Page::Submit => html! { <SubmitForm /> },
                            Page::Admin => html! { <AdminPanel /> },
                        }
                    }
                </div>
            </div>
        }
    }
}
