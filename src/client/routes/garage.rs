use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::{vehicle_form::VehicleForm, Page};
use crate::client::store::{notifications::Notifications, session::SessionState};
use crate::model::Vehicle;

#[component]
pub fn Garage() -> Element {
    let session_store = use_context::<Store<SessionState>>();
    let mut notifications = use_context::<Store<Notifications>>();
    let config = use_context::<crate::data::Config>();
    let mut vehicles = use_signal(Vec::<Vehicle>::new);
    let mut editing = use_signal(|| None::<Vehicle>);
    let mut show_form = use_signal(|| false);

    #[cfg(feature = "web")]
    let resource = {
        let config = config.clone();
        let resource = use_resource(move || {
            let config = config.clone();
            let session = session_store.read().session.clone();
            async move {
                let Some(session) = session else {
                    return Ok(Vec::new());
                };
                crate::data::vehicles::fetch_by_owner(
                    &config,
                    Some(&session),
                    &session.user.id,
                )
                .await
            }
        });

        use_effect(move || match &*resource.read_unchecked() {
            Some(Ok(fetched)) => vehicles.set(fetched.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch vehicles: {}", err),
            None => (),
        });

        resource
    };

    let on_delete = use_callback(move |vehicle_id: i64| {
        #[cfg(feature = "web")]
        {
            let config = config.clone();
            let session = session_store.peek().session.clone();
            spawn(async move {
                let Some(session) = session else {
                    return;
                };
                match crate::data::vehicles::delete(&config, &session, vehicle_id).await {
                    Ok(()) => {
                        let mut resource = resource;
                        resource.restart();
                    }
                    Err(err) => {
                        tracing::error!("Failed to delete vehicle: {}", err);
                        notifications.write().error("Could not remove the vehicle.");
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (vehicle_id, &config, &session_store, &mut notifications);
        }
    });

    rsx!(
        Title { "Garage | Revmeet" }
        Meta {
            name: "description",
            content: "Your vehicles on Revmeet."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[720px] flex flex-col gap-4",
                div { class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold", "Garage" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            editing.set(None);
                            let shown = *show_form.peek();
                            show_form.set(!shown);
                        },
                        if *show_form.read() { "Close" } else { "Add Vehicle" }
                    }
                }
                if *show_form.read() {
                    div { class: "flex justify-center",
                        VehicleForm {
                            existing: editing.read().clone(),
                            on_saved: move |_| {
                                show_form.set(false);
                                editing.set(None);
                                #[cfg(feature = "web")]
                                {
                                    let mut resource = resource;
                                    resource.restart();
                                }
                            },
                        }
                    }
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Make" }
                                th { "Model" }
                                th { "Power" }
                                th { "Year" }
                                th { "Fuel" }
                                th { "" }
                            }
                        }
                        tbody {
                            {vehicles.read().iter().cloned().map(|vehicle| {
                                let id = vehicle.id;
                                let edit_vehicle = vehicle.clone();
                                rsx!(
                                    tr { key: "{id}",
                                        td { "{vehicle.make}" }
                                        td { "{vehicle.model}" }
                                        td { "{vehicle.power_hp} hp" }
                                        td { "{vehicle.year}" }
                                        td { "{vehicle.fuel.label()}" }
                                        td {
                                            div { class: "flex gap-1 justify-end",
                                                button {
                                                    class: "btn btn-ghost btn-xs",
                                                    onclick: move |_| {
                                                        editing.set(Some(edit_vehicle.clone()));
                                                        show_form.set(true);
                                                    },
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-ghost btn-xs text-error",
                                                    onclick: move |_| on_delete.call(id),
                                                    "Remove"
                                                }
                                            }
                                        }
                                    }
                                )
                            })}
                        }
                    }
                }
            }
        }
    )
}
