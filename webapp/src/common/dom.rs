use tracing::error;
use wasm_bindgen::JsCast;
use web_sys::{Document, File, HtmlElement, HtmlInputElement};

fn document() -> anyhow::Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow::Error::msg("no global document exists"))
}

fn element_by_id<T: JsCast>(id: &str) -> anyhow::Result<T> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::Error::msg(format!("no element with id {id}")))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::Error::msg(format!("element {id} has an unexpected type")))
}

pub fn click(id: &str) -> anyhow::Result<()> {
    element_by_id::<HtmlElement>(id)?.click();
    Ok(())
}

// take the first file picked in a file input and clear the input, so that
// picking the same file again fires another change event
pub fn take_selected_file(id: &str) -> anyhow::Result<Option<File>> {
    let input = element_by_id::<HtmlInputElement>(id)?;

    let file = input.files().and_then(|files| files.get(0));
    input.set_value("");

    Ok(file)
}

pub fn alert(message: &str) {
    let result = web_sys::window()
        .ok_or_else(|| anyhow::Error::msg("no global window exists"))
        .and_then(|window| {
            window
                .alert_with_message(message)
                .map_err(|err| anyhow::Error::msg(format!("{err:?}")))
        });

    if let Err(err) = result {
        error!("failed to show alert \"{message}\": {err}");
    }
}
