mod architecture;
mod citation;
mod finetuning;
mod header;
mod hero;
mod home;
mod overview;
mod results;

pub use home::Home;
pub use results::{
    application_chart,
    application_table,
    baseline_chart,
    baseline_table,
    decoupled_chart,
    decoupled_table,
};
