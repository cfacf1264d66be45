use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use motion::UserRecord;

/// Static list of user records. `now` anchors the age labels.
#[component]
pub fn UserList(users: Vec<UserRecord>, now: DateTime<Utc>) -> Element {
    rsx! {
        ul {
            class: "user-list",
            for user in users {
                li {
                    key: "{user.name}",
                    class: "user-row",
                    img {
                        class: "user-photo",
                        src: "{user.photo}",
                        alt: "{user.name}",
                    }
                    div {
                        class: "user-text",
                        span { class: "user-name", "{user.name}" }
                        span { class: "user-description", "{user.description}" }
                    }
                    span { class: "user-time", {user.age_label(now)} }
                }
            }
        }
    }
}
