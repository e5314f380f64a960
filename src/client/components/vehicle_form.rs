use dioxus::prelude::*;

use crate::client::store::{notifications::Notifications, session::SessionState};
use crate::data::Config;
use crate::model::{FuelType, Vehicle};

/// Inline form creating or editing a garage vehicle.
#[component]
pub fn VehicleForm(existing: Option<Vehicle>, on_saved: EventHandler<()>) -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let mut notifications = use_context::<Store<Notifications>>();
    let config = use_context::<Config>();

    let vehicle_id = existing.as_ref().map(|v| v.id);
    let mut make = use_signal(|| existing.as_ref().map(|v| v.make.clone()).unwrap_or_default());
    let mut model = use_signal(|| existing.as_ref().map(|v| v.model.clone()).unwrap_or_default());
    let mut power = use_signal(|| {
        existing
            .as_ref()
            .map(|v| v.power_hp.to_string())
            .unwrap_or_default()
    });
    let mut year = use_signal(|| {
        existing
            .as_ref()
            .map(|v| v.year.to_string())
            .unwrap_or_default()
    });
    let mut fuel = use_signal(|| existing.as_ref().map(|v| v.fuel).unwrap_or(FuelType::Petrol));
    let mut submitting = use_signal(|| false);

    let on_submit = move |_| {
        let config = config.clone();
        #[cfg(feature = "web")]
        {
            let Some(session) = session_store.peek().session.clone() else {
                return;
            };
            if *submitting.peek() {
                return;
            }

            let make_value = make.peek().trim().to_string();
            let model_value = model.peek().trim().to_string();
            if make_value.is_empty() || model_value.is_empty() {
                notifications.write().error("Make and model are required.");
                return;
            }
            let Ok(power_value) = power.peek().trim().parse::<i32>() else {
                notifications.write().error("Power must be a number.");
                return;
            };
            let Ok(year_value) = year.peek().trim().parse::<i32>() else {
                notifications.write().error("Year must be a number.");
                return;
            };

            let vehicle = crate::model::vehicle::NewVehicle {
                make: make_value,
                model: model_value,
                power_hp: power_value,
                year: year_value,
                fuel: *fuel.peek(),
                owner_id: session.user.id.clone(),
            };

            submitting.set(true);
            spawn(async move {
                let result = match vehicle_id {
                    Some(id) => {
                        crate::data::vehicles::update(&config, &session, id, &vehicle).await
                    }
                    None => crate::data::vehicles::create(&config, &session, &vehicle).await,
                };

                match result {
                    Ok(()) => on_saved.call(()),
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to save vehicle: {}", err);
                        notifications.write().error("Could not save the vehicle.");
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (&config, &session_store, &mut submitting, &mut notifications);
        }
    };

    rsx!(
        form {
            class: "flex flex-col gap-2 w-full max-w-96",
            onsubmit: on_submit,
            div { class: "flex gap-2",
                input {
                    class: "input input-bordered flex-1",
                    placeholder: "Make",
                    value: "{make}",
                    oninput: move |evt| make.set(evt.value()),
                }
                input {
                    class: "input input-bordered flex-1",
                    placeholder: "Model",
                    value: "{model}",
                    oninput: move |evt| model.set(evt.value()),
                }
            }
            div { class: "flex gap-2",
                input {
                    class: "input input-bordered flex-1",
                    r#type: "number",
                    placeholder: "Power (hp)",
                    value: "{power}",
                    oninput: move |evt| power.set(evt.value()),
                }
                input {
                    class: "input input-bordered flex-1",
                    r#type: "number",
                    placeholder: "Year",
                    value: "{year}",
                    oninput: move |evt| year.set(evt.value()),
                }
            }
            select {
                class: "select select-bordered w-full",
                onchange: move |evt| {
                    if let Some(selected) = FuelType::from_str(&evt.value()) {
                        fuel.set(selected);
                    }
                },
                {FuelType::ALL.iter().map(|f| rsx!(
                    option {
                        value: "{f.as_str()}",
                        selected: *fuel.read() == *f,
                        "{f.label()}"
                    }
                ))}
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: *submitting.read(),
                if vehicle_id.is_some() { "Save Changes" } else { "Add Vehicle" }
            }
        }
    )
}
