pub mod colourise;
