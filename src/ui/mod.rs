/// UI layer: sidebar widgets, tab content, plots, and the data table.

pub mod panels;
pub mod plot;
pub mod table;
