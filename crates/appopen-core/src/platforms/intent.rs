//! Android intent URI synthesis.

/// Builder for `intent://TARGET#Intent;scheme=…;package=…;S.browser_fallback_url=…;end`.
#[derive(Debug, Clone)]
pub(crate) struct Intent<'a> {
    target: String,
    scheme: &'a str,
    package: Option<&'a str>,
    fallback: Option<String>,
}

impl<'a> Intent<'a> {
    pub(crate) fn new(target: impl Into<String>, scheme: &'a str) -> Self {
        Self {
            target: target.into(),
            scheme,
            package: None,
            fallback: None,
        }
    }

    pub(crate) fn package(mut self, package: &'a str) -> Self {
        self.package = Some(package);
        self
    }

    /// Fallback URL, embedded exactly as given. Callers encode it when the
    /// app expects an escaped value.
    pub(crate) fn fallback(mut self, url: impl Into<String>) -> Self {
        self.fallback = Some(url.into());
        self
    }

    pub(crate) fn build(self) -> String {
        let mut out = format!("intent://{}#Intent;scheme={};", self.target, self.scheme);
        if let Some(pkg) = self.package {
            out.push_str("package=");
            out.push_str(pkg);
            out.push(';');
        }
        if let Some(fb) = self.fallback {
            out.push_str("S.browser_fallback_url=");
            out.push_str(&fb);
            out.push(';');
        }
        out.push_str("end");
        out
    }
}
