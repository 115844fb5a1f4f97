// File: src/views.rs
// Purpose: Named page templates rendered with Maud

use crate::form_context::FormContext;
use crate::item::Item;
use maud::{html, Markup, DOCTYPE};

/// A template together with the model it needs
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Items { items: &'a [Item] },
    Item { item: &'a Item, saved: bool },
    AddForm { form: &'a FormContext },
    EditForm { id: i64, form: &'a FormContext },
    LoginForm,
}

impl View<'_> {
    pub fn template_name(&self) -> &'static str {
        match self {
            View::Items { .. } => "items",
            View::Item { .. } => "item",
            View::AddForm { .. } => "addForm",
            View::EditForm { .. } => "editForm",
            View::LoginForm => "loginForm",
        }
    }
}

/// Turns views into HTML
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &View<'_>) -> Markup;
}

/// Default renderer producing complete HTML pages
#[derive(Debug, Clone, Default)]
pub struct MaudRenderer;

impl ViewRenderer for MaudRenderer {
    fn render(&self, view: &View<'_>) -> Markup {
        match view {
            View::Items { items } => layout("Items", items_page(items)),
            View::Item { item, saved } => layout("Item", item_page(item, *saved)),
            View::AddForm { form } => layout(
                "Add item",
                item_form("Add item", "/items/add", "/items", form),
            ),
            View::EditForm { id, form } => {
                let action = format!("/items/{}/edit", id);
                let cancel = format!("/items/{}", id);
                layout("Edit item", item_form("Edit item", &action, &cancel, form))
            }
            View::LoginForm => layout("Login", login_page()),
        }
    }
}

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
                style {
                    ".field-error { border-color: #dc3545; color: #dc3545; }"
                    ".global-error { color: #dc3545; }"
                }
            }
            body {
                main.container { (body) }
            }
        }
    }
}

/// Standalone error page, used for 404 and 500 responses
pub fn error_page(status: u16, title: &str, message: &str) -> Markup {
    layout(
        title,
        html! {
            h1 { (status) " " (title) }
            p { (message) }
            a href="/items" { "Back to items" }
        },
    )
}

fn optional_number(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn items_page(items: &[Item]) -> Markup {
    html! {
        h2 { "Items" }
        a href="/items/add" { "Add item" }
        table {
            thead {
                tr { th { "ID" } th { "Name" } th { "Price" } th { "Quantity" } }
            }
            tbody {
                @for item in items {
                    @let id = item.id.map(|id| id.to_string()).unwrap_or_default();
                    tr {
                        td { a href={ "/items/" (id) } { (id) } }
                        td { a href={ "/items/" (id) } { (item.name) } }
                        td { (optional_number(item.price)) }
                        td { (optional_number(item.quantity)) }
                    }
                }
            }
        }
    }
}

fn item_page(item: &Item, saved: bool) -> Markup {
    let id = item.id.map(|id| id.to_string()).unwrap_or_default();
    html! {
        h2 { "Item" }
        @if saved {
            p.status { "Saved" }
        }
        dl {
            dt { "ID" } dd { (id) }
            dt { "Name" } dd { (item.name) }
            dt { "Price" } dd { (optional_number(item.price)) }
            dt { "Quantity" } dd { (optional_number(item.quantity)) }
        }
        a href={ "/items/" (id) "/edit" } { "Edit" }
        " "
        a href="/items" { "Back to list" }
    }
}

fn form_field(form: &FormContext, name: &str, label: &str) -> Markup {
    let errors = form.field_errors(name);
    html! {
        div {
            label for=(name) { (label) }
            input type="text" id=(name) name=(name) value=(form.value(name))
                class=[form.has_error(name).then_some("field-error")];
            @for message in errors {
                div.field-error { (message) }
            }
        }
    }
}

fn item_form(heading: &str, action: &str, cancel: &str, form: &FormContext) -> Markup {
    html! {
        h2 { (heading) }
        form action=(action) method="post" {
            @for message in &form.global_errors {
                p.global-error { (message) }
            }
            (form_field(form, "name", "Name"))
            (form_field(form, "price", "Price"))
            (form_field(form, "quantity", "Quantity"))
            button type="submit" { "Save" }
            " "
            a href=(cancel) { "Cancel" }
        }
    }
}

fn login_page() -> Markup {
    html! {
        h2 { "Login" }
        form action="/login" method="post" {
            div {
                label for="loginId" { "Login ID" }
                input type="text" id="loginId" name="loginId";
            }
            div {
                label for="password" { "Password" }
                input type="password" id="password" name="password";
            }
            button type="submit" { "Log in" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageSource;
    use crate::validation::Validate;

    #[test]
    fn test_template_names() {
        let form = FormContext::default();
        assert_eq!(View::Items { items: &[] }.template_name(), "items");
        assert_eq!(View::AddForm { form: &form }.template_name(), "addForm");
        assert_eq!(View::EditForm { id: 1, form: &form }.template_name(), "editForm");
        assert_eq!(View::LoginForm.template_name(), "loginForm");
    }

    #[test]
    fn test_items_page_lists_items() {
        let mut item = Item::new("book", Some(10000), Some(3));
        item.id = Some(7);
        let html = MaudRenderer.render(&View::Items { items: &[item] }).into_string();
        assert!(html.contains(r#"href="/items/7""#));
        assert!(html.contains("book"));
        assert!(html.contains("10000"));
    }

    #[test]
    fn test_item_page_saved_banner() {
        let mut item = Item::new("book", Some(10000), Some(3));
        item.id = Some(1);
        let saved = MaudRenderer.render(&View::Item { item: &item, saved: true }).into_string();
        let plain = MaudRenderer.render(&View::Item { item: &item, saved: false }).into_string();
        assert!(saved.contains("Saved"));
        assert!(!plain.contains("Saved"));
    }

    #[test]
    fn test_add_form_shows_errors_and_values() {
        let item = Item::new("", Some(100), Some(1));
        let mut result = crate::validation::BindingResult::new("item");
        result.extend(item.validate());
        let form = FormContext::resolve(&item, &result, &MessageSource::with_defaults());

        let html = MaudRenderer.render(&View::AddForm { form: &form }).into_string();
        assert!(html.contains("Item name is required."));
        assert!(html.contains(r#"class="global-error""#));
        assert!(html.contains(r#"value="100""#));
        assert!(html.contains(r#"action="/items/add""#));
    }

    #[test]
    fn test_form_escapes_values() {
        let item = Item::new("<script>", Some(1000), Some(10));
        let form = FormContext::for_item(&item);
        let html = MaudRenderer.render(&View::AddForm { form: &form }).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_page() {
        let html = error_page(404, "Not Found", "Item 3 not found").into_string();
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("Item 3 not found"));
    }

    #[test]
    fn test_edit_form_posts_to_item() {
        let form = FormContext::for_item(&Item::new("book", Some(1000), Some(10)));
        let html = MaudRenderer.render(&View::EditForm { id: 4, form: &form }).into_string();
        assert!(html.contains(r#"action="/items/4/edit""#));
    }
}
