use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "about-page",
            div { class: "about-grid",
                div { class: "about-profile",
                    img { class: "about-photo", src: "/static/images/placeholder.svg", alt: "William Ryan" }
                    h2 { "William Ryan" }
                    dl { class: "about-facts",
                        dt { "Current Role" }
                        dd { "Design Engineering Masters Student (Northwestern University)" }
                        dt { "Background" }
                        dd { "Computer Engineering (B.S.), Computer Science Education (Grades 9-12)" }
                        dt { "Location" }
                        dd { "Chicago, IL" }
                        dt { "Interests" }
                        dd { "Human-Computer Interaction, Design Systems, Storytelling" }
                    }
                }

                div { class: "about-story",
                    h2 { "Every Project a Classroom" }
                    p {
                        "Before pursuing a Master's in Engineering Design and Innovation I worked as a landscaper, "
                        "marine ecology researcher, line cook, wine professional, coach and teacher. "
                        "There is always a new lesson to learn, an adventure to experience, and a story to tell."
                    }
                    h2 { "More Than 1's and 0's" }
                    p {
                        "Teaching high school computer science, I bridged introductory programming and mechatronics. "
                        "Outside the classroom I built a personal reading companion, a book group in your pocket. "
                        "Design can make our narratives more convenient so we can focus on the part that matters: humanity."
                    }
                    h2 { "Beyond Remembering" }
                    p {
                        "Today I am widening my skills as a designer to build immersive experiences that let "
                        "students and story-lovers step into the past, turning history into something we can live."
                    }
                }
            }

            div { class: "page-links",
                Link { class: "button-primary", to: Route::Projects {}, "View My Projects" }
                Link { class: "button-secondary", to: Route::Bookshelf {}, "Visit The Bookshelf" }
            }
        }
    }
}
