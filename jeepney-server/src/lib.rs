//! Jeepney route query server.
//!
//! A web service that answers geospatial queries over a fixed dataset of
//! named jeepney routes: "which route is nearest this point?", "which
//! sequence of routes gets me from here to there?", and "which routes are
//! plausibly relevant to this trip?"

pub mod dataset;
pub mod domain;
pub mod geo;
pub mod planner;
pub mod web;
