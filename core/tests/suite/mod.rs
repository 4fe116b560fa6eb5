mod basic;
mod coercion;
mod edge_cases;
mod iteration;
mod scenarios;
