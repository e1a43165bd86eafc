use yew::{classes, html, Callback, Component, Context, Html, Properties};

use crate::app::Page;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active: Page,
    pub on_navigate: Callback<Page>,
}

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let pages = [Page::Home, Page::Browse, Page::Submit, Page::Admin];
        html! {
            <nav class="navbar">
                <span class="brand">{ "Fontclara" }</span>
                {
                    for pages.iter().map(|page| {
                        let page = *page;
                        let on_navigate = props.on_navigate.clone();
                        let active = (props.active == page).then_some("active");
                        html! {
                            <button
                                class={classes!(active)}
                                onclick={Callback::from(move |_| on_navigate.emit(page))}
                            >
                                { page.label() }
                            </button>
                        }
                    })
                }
            </nav>
        }
    }
}
