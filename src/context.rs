use crate::url::ReturnUrl;

/// Platform-provided wrapper around an incoming URL and metadata about the
/// application that opened it.
#[derive(Debug, Clone)]
pub struct OpenUrlContext<'a> {
    pub url: &'a ReturnUrl,
    pub source_application: Option<&'a str>,
    pub annotation: Option<&'a str>,
    pub open_in_place: bool,
}

impl<'a> OpenUrlContext<'a> {
    pub fn new(url: &'a ReturnUrl) -> Self {
        Self {
            url,
            source_application: None,
            annotation: None,
            open_in_place: false,
        }
    }

    pub fn source_application(mut self, bundle_id: &'a str) -> Self {
        self.source_application = Some(bundle_id);
        self
    }

    pub fn annotation(mut self, annotation: &'a str) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub fn open_in_place(mut self, open_in_place: bool) -> Self {
        self.open_in_place = open_in_place;
        self
    }

    pub fn url(&self) -> &'a ReturnUrl {
        self.url
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
