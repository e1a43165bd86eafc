//! Public sample browser.
//!
//! Renders the validated samples newest-first, coloring each value by the
//! same threshold rules the backend documents (the quality module is shared
//! through `common`). Rows with any out-of-range value, derived values
//! included, are counted into a warning banner above the table.

use common::model::sample::{Measurements, Sample};
use common::quality::{
    haloacetic_sum, has_out_of_range, residual_combined_chlorine, RangeCheck, ThresholdTable,
};
use yew::{html, Component, Context, Html};

use crate::api;

pub enum Msg {
    Loaded(Result<Vec<Sample>, String>),
}

pub struct SamplesTable {
    samples: Vec<Sample>,
    thresholds: ThresholdTable,
    error: Option<String>,
    loading: bool,
}

impl Component for SamplesTable {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link()
            .send_future(async { Msg::Loaded(api::fetch_public_samples().await) });
        Self {
            samples: Vec::new(),
            thresholds: ThresholdTable::default(),
            error: None,
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(samples)) => {
                self.samples = samples;
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
        let out_of_range_count = self
            .samples
            .iter()
            .filter(|s| has_out_of_range(&s.measurements, &self.thresholds))
            .count();

        html! {
            <div>
                <h2>{ "Mostres validades" }</h2>
                if let Some(error) = &self.error {
                    <div class="error">{ format!("No s'han pogut carregar les mostres: {error}") }</div>
                }
                if out_of_range_count > 0 {
                    <div class="warning-banner">
                        { format!("⚠ {out_of_range_count} mostres tenen algun valor fora dels límits de qualitat") }
                    </div>
                }
                <p>
                    <a href="/api/samples/export.csv">{ "Descarrega-ho tot en CSV" }</a>
                </p>
                if self.loading {
                    <p>{ "Carregant..." }</p>
                } else if self.samples.is_empty() {
                    <p>{ "Encara no hi ha mostres validades." }</p>
                } else {
                    <div style="overflow-x: auto;">
                        <table>
                            <thead>
                                <tr>
                                    <th>{ "Data" }</th>
                                    <th>{ "Punt de mostreig" }</th>
                                    { for Measurements::KEYS.iter().map(|key| html! {
                                        <th>{ self.header_label(key) }</th>
                                    }) }
                                    <th>{ "Suma haloacètics" }</th>
                                    <th>{ "Clor combinat residual" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for self.samples.iter().map(|sample| self.render_row(sample)) }
                            </tbody>
                        </table>
                    </div>
                }
            </div>
        }
    }
}

impl SamplesTable {
    fn header_label(&self, key: &str) -> String {
        match self.thresholds.get(key) {
            Some(t) => format!("{} ({})", t.name, t.unit),
            None => key.replace('_', " "),
        }
    }

    fn render_row(&self, sample: &Sample) -> Html {
        html! {
            <tr>
                <td>{ &sample.sampling_date }</td>
                <td>{ &sample.location }</td>
                { for Measurements::KEYS.iter().map(|key| {
                    self.render_value_cell(key, sample.measurements.get(key))
                }) }
                { self.render_value_cell(
                    common::quality::SUMA_HALOACETICS,
                    haloacetic_sum(&sample.measurements),
                ) }
                { self.render_value_cell(
                    "clor_combinat_residual",
                    residual_combined_chlorine(&sample.measurements),
                ) }
            </tr>
        }
    }

    fn render_value_cell(&self, key: &str, value: Option<f64>) -> Html {
        let Some(value) = value else {
            return html! { <td>{ "—" }</td> };
        };
        let class = match self.thresholds.classify(key, value) {
            RangeCheck::WithinRange => "ok",
            RangeCheck::BelowMin | RangeCheck::AboveMax => "out-of-range",
            RangeCheck::NoThreshold => "",
        };
        html! { <td class={class}>{ format!("{value}") }</td> }
    }
}
