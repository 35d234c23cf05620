use crate::config::ElementIds;
use crate::error::ClientError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

/// The elements of the host page the board attaches to
pub struct PageElements {
	pub list: Element,
	pub select: HtmlSelectElement,
	pub form: HtmlFormElement,
	pub email: HtmlInputElement,
	pub banner: HtmlElement,
}

impl PageElements {
	pub fn locate(document: &Document, ids: &ElementIds) -> Result<Self, ClientError> {
		Ok(Self {
			list: element_by_id(document, ids.list)?,
			select: element_by_id(document, ids.select)?,
			form: element_by_id(document, ids.form)?,
			email: element_by_id(document, ids.email)?,
			banner: element_by_id(document, ids.banner)?,
		})
	}
}

pub fn document() -> Result<Document, ClientError> {
	web_sys::window()
		.and_then(|window| window.document())
		.ok_or(ClientError::NoDocument)
}

fn element_by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T, ClientError> {
	document
		.get_element_by_id(id)
		.ok_or(ClientError::MissingElement(id))?
		.dyn_into::<T>()
		.map_err(|_| ClientError::ElementType(id))
}

/// Removes everything inside `container`, including text left there by the page
pub fn clear_children(container: &Element) {
	while let Some(child) = container.first_child() {
		if container.remove_child(&child).is_err() {
			break;
		}
	}
}
