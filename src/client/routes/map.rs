use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::{event_form::EventForm, Page};

/// Default view over central Europe until the first marker loads.
const DEFAULT_CENTER: (f64, f64) = (50.0, 9.0);
const DEFAULT_ZOOM: f64 = 5.0;

#[component]
pub fn MapView() -> Element {
    // Coordinates picked by clicking the map, fed into the event form.
    let picked = use_signal(|| None::<(f64, f64)>);
    let mut picked_address = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        use crate::client::leaflet;
        use crate::client::store::session::SessionState;
        use crate::data::Config;

        let config = use_context::<Config>();
        let session_store = use_context::<Store<SessionState>>();
        let mut map_handle = use_signal(|| None::<leaflet::LeafletMap>);

        let events = use_resource({
            let config = config.clone();
            move || {
                let config = config.clone();
                let session = session_store.read().session.clone();
                async move { crate::data::events::fetch_upcoming(&config, session.as_ref(), 200).await }
            }
        });

        // Rebuild the widget whenever a fresh event set lands. The previous
        // map instance must be removed or Leaflet refuses the container.
        {
            let config = config.clone();
            use_effect(move || {
                let fetched = match &*events.read_unchecked() {
                    Some(Ok(fetched)) => fetched.clone(),
                    Some(Err(err)) => {
                        tracing::error!("Failed to fetch events for map: {}", err);
                        return;
                    }
                    None => return,
                };

                if let Some(previous) = map_handle.write().take() {
                    previous.remove();
                }

                let map = leaflet::leaflet_map("event-map");
                map.set_view(
                    &leaflet::lat_lng(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
                    DEFAULT_ZOOM,
                );
                leaflet::tile_layer(&config.tile_url).add_to(&map);

                for event in &fetched {
                    leaflet::marker(&leaflet::lat_lng(event.latitude, event.longitude))
                        .add_to_map(&map)
                        .bind_popup(&format!(
                            "<b>{}</b><br>{}",
                            event.title,
                            event.starts_at.format("%Y-%m-%d %H:%M UTC")
                        ));
                }

                let mut picked = picked;
                let on_click = Closure::wrap(Box::new(move |evt: JsValue| {
                    if let Some(pair) = leaflet::click_coordinates(&evt) {
                        picked.set(Some(pair));
                    }
                }) as Box<dyn FnMut(JsValue)>);
                map.on("click", on_click.as_ref().unchecked_ref());
                // The closure must outlive the map; Leaflet holds the JS side.
                on_click.forget();

                map_handle.set(Some(map));
            });
        }

        // Reverse-geocode a picked coordinate to prefill the form's address.
        use_resource(move || {
            let config = config.clone();
            let pair = *picked.read();
            async move {
                let Some((latitude, longitude)) = pair else {
                    return;
                };
                match crate::data::geocode::reverse(&config, latitude, longitude).await {
                    Ok(address) => picked_address.set(address),
                    Err(err) => tracing::error!("Reverse geocoding failed: {}", err),
                }
            }
        });

        use_drop(move || {
            if let Some(map) = map_handle.write().take() {
                map.remove();
            }
        });
    }

    rsx!(
        Title { "Map | Revmeet" }
        Meta {
            name: "description",
            content: "Map of upcoming car meets and events."
        }
        Page { class: "flex flex-col items-center gap-4",
            div {
                id: "event-map",
                class: "w-full max-w-[1200px] h-[60vh] rounded",
            }
            if let Some((latitude, longitude)) = *picked.read() {
                div { class: "flex flex-col items-center gap-2",
                    p { class: "text-sm opacity-70",
                        "New event at {latitude:.5}, {longitude:.5}"
                    }
                    EventForm {
                        initial_coords: Some((latitude, longitude)),
                        initial_address: picked_address,
                        on_created: move |_| picked_address.set(None),
                    }
                }
            } else {
                p { class: "text-sm opacity-70",
                    "Click the map to place a new event."
                }
            }
        }
    )
}
