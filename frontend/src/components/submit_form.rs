//! Sample submission form.
//!
//! Mirrors the ingestion rules client-side (date, location, at least one
//! measurement) so most mistakes are caught before the request, but the
//! backend remains the authority: its `detail` message is shown verbatim
//! when it rejects a payload anyway.

use std::collections::HashMap;

use common::model::sample::{Measurements, SampleSubmission};
use common::quality::ThresholdTable;
use common::requests::SubmitResponse;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;

pub enum Msg {
    SetDate(String),
    SetLocation(String),
    SetMeasurement(&'static str, String),
    Submit,
    Submitted(Result<SubmitResponse, String>),
}

pub struct SubmitForm {
    sampling_date: String,
    location: String,
    inputs: HashMap<&'static str, String>,
    thresholds: ThresholdTable,
    error: Option<String>,
    confirmation: Option<i64>,
    submitting: bool,
}

impl Component for SubmitForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            sampling_date: String::new(),
            location: String::new(),
            inputs: HashMap::new(),
            thresholds: ThresholdTable::default(),
            error: None,
            confirmation: None,
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetDate(value) => {
                self.sampling_date = value;
                true
            }
            Msg::SetLocation(value) => {
                self.location = value;
                true
            }
            Msg::SetMeasurement(key, value) => {
                self.inputs.insert(key, value);
                true
            }
            Msg::Submit => {
                self.error = None;
                self.confirmation = None;
                match self.build_submission() {
                    Ok(submission) => {
                        self.submitting = true;
                        ctx.link().send_future(async move {
                            Msg::Submitted(api::submit_sample(&submission).await)
                        });
                    }
                    Err(message) => self.error = Some(message),
                }
                true
            }
            Msg::Submitted(Ok(response)) => {
                self.submitting = false;
                self.confirmation = Some(response.id);
                self.sampling_date.clear();
                self.location.clear();
                self.inputs.clear();
                true
            }
            Msg::Submitted(Err(message)) => {
                self.submitting = false;
                self.error = Some(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div>
                <h2>{ "Envia una mostra" }</h2>
                if let Some(id) = self.confirmation {
                    <div class="notice">
                        { format!("Mostra #{id} rebuda. Restarà pendent fins que un administrador la validi.") }
                    </div>
                }
                if let Some(error) = &self.error {
                    <div class="error">{ error }</div>
                }
                <form onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Submit })}>
                    <div class="field">
                        <label>{ "Data de la mostra" }</label>
                        <input
                            type="date"
                            value={self.sampling_date.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetDate(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </div>
                    <div class="field">
                        <label>{ "Punt de mostreig" }</label>
                        <input
                            type="text"
                            placeholder="Font Vella, Dipòsit..."
                            value={self.location.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetLocation(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </div>
                    <h3>{ "Mesures (almenys una)" }</h3>
                    <div class="measurement-grid">
                        { for Measurements::KEYS.iter().map(|key| self.render_measurement_input(ctx, key)) }
                    </div>
                    <p>
                        <button type="submit" class="primary" disabled={self.submitting}>
                            { if self.submitting { "Enviant..." } else { "Envia" } }
                        </button>
                    </p>
                </form>
            </div>
        }
    }
}

impl SubmitForm {
    fn render_measurement_input(&self, ctx: &Context<Self>, key: &'static str) -> Html {
        let label = match self.thresholds.get(key) {
            Some(t) => format!("{} ({})", t.name, t.unit),
            None => key.replace('_', " "),
        };
        let value = self.inputs.get(key).cloned().unwrap_or_default();
        html! {
            <div class="field">
                <label>{ label }</label>
                <input
                    type="number"
                    step="any"
                    {value}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        Msg::SetMeasurement(key, e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
        }
    }

    /// Parses the form state into a submission, reporting the first problem
    /// found in the user's language.
    fn build_submission(&self) -> Result<SampleSubmission, String> {
        if self.sampling_date.trim().is_empty() {
            return Err("Cal indicar la data de la mostra.".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Cal indicar el punt de mostreig.".to_string());
        }

        let mut submission = SampleSubmission {
            sampling_date: self.sampling_date.trim().to_string(),
            location: self.location.trim().to_string(),
            measurements: Measurements::default(),
        };
        let mut any = false;
        for (key, raw) in &self.inputs {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let value: f64 = raw
                .parse()
                .map_err(|_| format!("El valor de «{key}» no és un nombre."))?;
            submission.measurements.set(key, value);
            any = true;
        }
        if !any {
            return Err("Cal omplir almenys una mesura.".to_string());
        }
        Ok(submission)
    }
}
