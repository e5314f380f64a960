#![allow(non_snake_case)]

use revmeet::client;

fn main() {
    dioxus::launch(client::App);
}
