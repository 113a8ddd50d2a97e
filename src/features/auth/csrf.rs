//! Access to the CSRF token shared by every form on the page. The token is
//! owned by one parent (see `state::CsrfProvider`); forms read it when
//! building a body and replace it when the server hands out a fresh one.

pub trait CsrfStore {
    fn current(&self) -> String;
    fn replace(&self, token: String);
}
