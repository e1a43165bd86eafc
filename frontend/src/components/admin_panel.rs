//! Administration panel: moderation of submitted samples plus the
//! statistics overview.
//!
//! The bearer token is kept in component state only: it is typed in (or
//! pasted from the identity tooling) at the start of a session and sent with
//! every admin request. A failed load drops back to the token prompt.

use std::collections::HashSet;

use common::model::sample::Sample;
use common::model::stats::AdminStatistics;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;

pub enum Msg {
    SetToken(String),
    Connect,
    PendingLoaded(Result<i64, String>),
    Loaded(Result<(Vec<Sample>, AdminStatistics), String>),
    ToggleSelection(i64),
    SetValidated(i64, bool),
    BulkValidate(bool),
    Delete(i64),
    ActionDone(Result<(), String>),
}

pub struct AdminPanel {
    token: String,
    connected: bool,
    samples: Vec<Sample>,
    statistics: Option<AdminStatistics>,
    pending_count: Option<i64>,
    selection: HashSet<i64>,
    error: Option<String>,
    busy: bool,
}

impl Component for AdminPanel {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        // The pending count is public: it gives the reviewer a reason to log
        // in before any credentials are entered.
        ctx.link()
            .send_future(async { Msg::PendingLoaded(api::fetch_pending_count().await) });
        Self {
            token: String::new(),
            connected: false,
            samples: Vec::new(),
            statistics: None,
            pending_count: None,
            selection: HashSet::new(),
            error: None,
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetToken(token) => {
                self.token = token;
                true
            }
            Msg::Connect => {
                self.error = None;
                self.reload(ctx);
                true
            }
            Msg::PendingLoaded(result) => {
                self.pending_count = result.ok();
                true
            }
            Msg::Loaded(Ok((samples, statistics))) => {
                self.samples = samples;
                self.statistics = Some(statistics);
                self.connected = true;
                self.busy = false;
                // Drop selections pointing at samples that no longer exist.
                let ids: HashSet<i64> = self.samples.iter().map(|s| s.id).collect();
                self.selection.retain(|id| ids.contains(id));
                true
            }
            Msg::Loaded(Err(error)) => {
                self.error = Some(error);
                self.connected = false;
                self.busy = false;
                true
            }
            Msg::ToggleSelection(id) => {
                if !self.selection.remove(&id) {
                    self.selection.insert(id);
                }
                true
            }
            Msg::SetValidated(id, validated) => {
                let token = self.token.clone();
                self.busy = true;
                ctx.link().send_future(async move {
                    Msg::ActionDone(api::set_validated(&token, id, validated).await)
                });
                true
            }
            Msg::BulkValidate(validated) => {
                if self.selection.is_empty() {
                    self.error = Some("Cap mostra seleccionada.".to_string());
                    return true;
                }
                let token = self.token.clone();
                let ids: Vec<i64> = self.selection.iter().copied().collect();
                self.busy = true;
                ctx.link().send_future(async move {
                    Msg::ActionDone(api::bulk_validate(&token, ids, validated).await.map(
                        |response| {
                            gloo_console::info!(format!(
                                "bulk validation updated {} samples",
                                response.updated_count
                            ));
                        },
                    ))
                });
                true
            }
            Msg::Delete(id) => {
                let token = self.token.clone();
                self.busy = true;
                ctx.link()
                    .send_future(
                        async move { Msg::ActionDone(api::delete_sample(&token, id).await) },
                    );
                true
            }
            Msg::ActionDone(Ok(())) => {
                self.reload(ctx);
                true
            }
            Msg::ActionDone(Err(error)) => {
                self.error = Some(error);
                self.busy = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.connected {
            return self.view_token_prompt(ctx);
        }
        let link = ctx.link();
        let pending = self.samples.iter().filter(|s| !s.validated).count();
        html! {
            <div>
                <h2>
                    { "Administració" }
                    if pending > 0 {
                        <span class="badge">{ format!("{pending} pendents") }</span>
                    }
                </h2>
                if let Some(error) = &self.error {
                    <div class="error">{ error }</div>
                }
                { self.view_statistics() }
                <p>
                    <button class="small" disabled={self.busy}
                        onclick={link.callback(|_| Msg::BulkValidate(true))}>
                        { "Valida la selecció" }
                    </button>
                    <button class="small" disabled={self.busy}
                        onclick={link.callback(|_| Msg::BulkValidate(false))}>
                        { "Invalida la selecció" }
                    </button>
                </p>
                <table>
                    <thead>
                        <tr>
                            <th></th>
                            <th>{ "Id" }</th>
                            <th>{ "Data" }</th>
                            <th>{ "Punt de mostreig" }</th>
                            <th>{ "Estat" }</th>
                            <th>{ "Accions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.samples.iter().map(|sample| self.render_row(ctx, sample)) }
                    </tbody>
                </table>
            </div>
        }
    }
}

impl AdminPanel {
    fn reload(&mut self, ctx: &Context<Self>) {
        let token = self.token.clone();
        self.busy = true;
        ctx.link().send_future(async move {
            let samples = api::fetch_admin_samples(&token).await;
            let statistics = api::fetch_statistics(&token).await;
            Msg::Loaded(samples.and_then(|s| statistics.map(|st| (s, st))))
        });
    }

    fn view_token_prompt(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div>
                <h2>{ "Administració" }</h2>
                if let Some(pending) = self.pending_count {
                    if pending > 0 {
                        <div class="notice">
                            { format!("Hi ha {pending} mostres pendents de revisió.") }
                        </div>
                    }
                }
                if let Some(error) = &self.error {
                    <div class="error">{ error }</div>
                }
                <form onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Connect })}>
                    <div class="field">
                        <label>{ "Testimoni d'administrador" }</label>
                        <input
                            type="password"
                            value={self.token.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetToken(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </div>
                    <button type="submit" class="primary" disabled={self.busy}>
                        { "Connecta" }
                    </button>
                </form>
            </div>
        }
    }

    fn view_statistics(&self) -> Html {
        let Some(stats) = &self.statistics else {
            return html! {};
        };
        html! {
            <div class="stats-row">
                <div class="card">
                    <h3>{ "Mostres" }</h3>
                    <div class="value">{ stats.total_samples }</div>
                    <div class="updated">
                        { format!("{} validades · {} pendents", stats.validated_samples, stats.pending_samples) }
                    </div>
                </div>
                <div class="card">
                    <h3>{ "Visites (30 dies)" }</h3>
                    <div class="value">{ stats.total_visits_30_days }</div>
                    <div class="updated">
                        { format!("{} dies amb activitat aquesta setmana", stats.visits_last_7_days.len()) }
                    </div>
                </div>
                <div class="card">
                    <h3>{ "Punts de mostreig" }</h3>
                    <div class="value">{ stats.samples_by_location.len() }</div>
                    if let Some(top) = stats.samples_by_location.first() {
                        <div class="updated">
                            { format!("Més actiu: {} ({})", top.location, top.count) }
                        </div>
                    }
                </div>
            </div>
        }
    }

    fn render_row(&self, ctx: &Context<Self>, sample: &Sample) -> Html {
        let link = ctx.link();
        let id = sample.id;
        let checked = self.selection.contains(&id);
        html! {
            <tr>
                <td>
                    <input
                        type="checkbox"
                        checked={checked}
                        onchange={link.callback(move |_| Msg::ToggleSelection(id))}
                    />
                </td>
                <td>{ id }</td>
                <td>{ &sample.sampling_date }</td>
                <td>{ &sample.location }</td>
                <td>
                    { if sample.validated { "validada" } else { "pendent" } }
                </td>
                <td>
                    {
                        if sample.validated {
                            html! {
                                <button class="small" disabled={self.busy}
                                    onclick={link.callback(move |_| Msg::SetValidated(id, false))}>
                                    { "Invalida" }
                                </button>
                            }
                        } else {
                            html! {
                                <button class="small" disabled={self.busy}
                                    onclick={link.callback(move |_| Msg::SetValidated(id, true))}>
                                    { "Valida" }
                                </button>
                            }
                        }
                    }
                    <button class="small danger" disabled={self.busy}
                        onclick={link.callback(move |_| Msg::Delete(id))}>
                        { "Esborra" }
                    </button>
                </td>
            </tr>
        }
    }
}
