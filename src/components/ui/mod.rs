mod alert;
mod button;
mod csrf_field;
mod field;

pub(crate) use alert::{FormError, Notice};
pub(crate) use button::SubmitButton;
pub(crate) use csrf_field::CsrfField;
pub(crate) use field::TextField;
