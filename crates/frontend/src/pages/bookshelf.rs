use dioxus::prelude::*;
use portfolio_shared::models::Book;
use portfolio_shared::shelf;

use crate::api;
use crate::components::steam_games::SteamGames;

#[component]
pub fn Bookshelf() -> Element {
    let books_resource = use_resource(|| api::fetch_books());
    let mut selected_tags = use_signal(Vec::<String>::new);
    let mut selected_book = use_signal(|| None::<Book>);

    let shelf_body = match &*books_resource.read() {
        None => rsx! {
            div { class: "loading", div { class: "spinner" } }
        },
        Some(Err(e)) => rsx! {
            p { class: "load-error", "Failed to load books: {e}" }
        },
        Some(Ok(books)) => {
            let tags = selected_tags.read().clone();
            let categories = shelf::categories(books);
            let filtered = shelf::filter_by_categories(books, &tags).len();
            let displayed: Vec<Book> = shelf::displayed_books(books, &tags)
                .into_iter()
                .cloned()
                .collect();
            rsx! {
                div { class: "shelf-toolbar",
                    span { class: "shelf-count", "{filtered} books read recently" }
                    div { class: "tag-list",
                        for category in categories {
                            button {
                                key: "{category}",
                                class: if tags.contains(&category) { "tag-button selected" } else { "tag-button" },
                                onclick: {
                                    let category = category.clone();
                                    move |_| shelf::toggle_tag(&mut selected_tags.write(), &category)
                                },
                                "{category}"
                            }
                        }
                    }
                }
                div { class: "book-grid",
                    for book in displayed {
                        BookCover { key: "{book.id}", book, selected_book }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "bookshelf-page",
            header { class: "page-hero",
                h1 { "the bookshelf" }
                p { class: "hero-tagline", "I believe you are what you read" }
            }

            section { class: "shelf",
                h2 { "Recently Read Books" }
                p { class: "shelf-intro",
                    "I read across genres but always drift back to fantasy. I keep one brain book and one "
                    "heart book in rotation, and audiobooks make the commute go faster."
                }
                {shelf_body}
            }

            if let Some(book) = selected_book() {
                BookModal { book, on_close: move |_| selected_book.set(None) }
            }

            SteamGames {}
        }
    }
}

#[component]
fn BookCover(book: Book, mut selected_book: Signal<Option<Book>>) -> Element {
    let clicked = book.clone();

    rsx! {
        button {
            class: "book-cover",
            onclick: move |_| selected_book.set(Some(clicked.clone())),
            img { src: "{book.cover}", alt: "{book.title} cover" }
            div { class: "book-cover-caption",
                h3 { "{book.title}" }
                p { "{book.author}" }
            }
        }
    }
}

#[component]
fn BookModal(book: Book, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: "book-modal",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                img { class: "book-modal-cover", src: "{book.cover}", alt: "{book.title} cover" }
                div { class: "book-modal-body",
                    div { class: "book-modal-header",
                        div {
                            h2 { "{book.title}" }
                            p { class: "book-author", "by {book.author}" }
                            div { class: "book-meta",
                                span { class: "pill", "{book.category}" }
                                span { "{book.completed_date}" }
                            }
                        }
                        button {
                            class: "modal-close",
                            aria_label: "Close",
                            onclick: move |_| on_close.call(()),
                            "\u{00d7}"
                        }
                    }
                    h3 { "Summary" }
                    p { "{book.summary}" }
                }
            }
        }
    }
}
