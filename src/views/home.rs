use dioxus::prelude::*;
use super::architecture::Architecture;
use super::citation::{ Citation, Footer };
use super::finetuning::{ DecoupledFineTuning, WhyItMatters };
use super::header::Header;
use super::hero::Hero;
use super::overview::{ Introduction, UseCases };
use super::results::Results;

/// The whole landing page, top to bottom.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            Header {}
            main {
                Hero {}
                Introduction {}
                UseCases {}
                Architecture {}
                Results {}
                DecoupledFineTuning {}
                WhyItMatters {}
                Citation {}
            }
            Footer {}
        }
    }
}
