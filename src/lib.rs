#![allow(non_snake_case)]

pub mod client;
pub mod data;
pub mod membership;
pub mod model;
