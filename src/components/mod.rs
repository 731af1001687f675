mod accordion;
mod bar_chart;
mod copy_button;
mod data_table;
mod icons;
mod theme_provider;
mod theme_toggle;

pub use accordion::{ next_open, Accordion, AccordionItem };
pub use bar_chart::{ axis_max, BarChart, BarRect, ChartLayout, ChartSpec, Series };
pub use copy_button::CopyButton;
pub use data_table::{ DataTable, TableRow };
pub use icons::{ Icon, IconKind };
pub use theme_provider::{ use_theme, ThemeHandle, ThemeProvider, ThemedRoot };
pub use theme_toggle::{ toggle_affordance, ThemeToggle, ToggleAffordance };
