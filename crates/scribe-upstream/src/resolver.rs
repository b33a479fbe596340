use serde::Deserialize;
use tracing::debug;

use crate::http::HttpGet;
use crate::Result;

/// Base of the Anitya v2 API.
pub const API_BASE: &str = "https://release-monitoring.org/api/v2";

const DISTRIBUTION: &str = "Fedora";
const ITEMS_PER_PAGE: &str = "1";

#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// A distribution package mapped to its upstream project.
#[derive(Debug, Deserialize)]
struct PackageMatch {
    project: String,
}

/// An upstream project as tracked by the monitoring service.
#[derive(Debug, Deserialize)]
struct ProjectMatch {
    version: Option<String>,
}

/// Two-stage lookup of the latest known upstream version of a package:
/// the distribution mapping first (`packages`), then the project record
/// (`projects`). When no mapping exists the package name doubles as the
/// project name.
pub struct UpstreamResolver<H> {
    http: H,
    api_base: String,
}

impl<H: HttpGet> UpstreamResolver<H> {
    pub fn new(http: H) -> Self {
        Self::with_api_base(http, API_BASE)
    }

    /// The base URL is injectable so tests can point at a stand-in.
    pub fn with_api_base(http: H, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
        }
    }

    /// Latest upstream version for `package_name`, or `None` when the
    /// package is unknown upstream. An empty name short-circuits to
    /// `None` without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UpstreamError::Transport`] only for failures of
    /// the `packages` stage; `projects` stage failures collapse to
    /// `None`. The asymmetry is intentional: without a first-stage
    /// answer the lookup is broken, without a second-stage answer the
    /// package is merely untracked.
    pub fn resolve(&self, package_name: &str) -> Result<Option<String>> {
        if package_name.is_empty() {
            return Ok(None);
        }

        let package = self.first_package(package_name)?;

        let project_name =
            package.map_or_else(|| package_name.to_string(), |found| found.project);
        debug!(package = package_name, project = %project_name, "resolved distribution mapping");

        let project = match self.first_project(&project_name) {
            Ok(found) => found,
            Err(error) => {
                debug!(project = %project_name, %error, "projects query failed, treating as no data");
                None
            }
        };

        Ok(project.and_then(|found| found.version))
    }

    fn first_package(&self, name: &str) -> Result<Option<PackageMatch>> {
        let url = format!("{}/packages/", self.api_base);
        let response = self.http.get(
            &url,
            &[
                ("distribution", DISTRIBUTION),
                ("name", name),
                ("items_per_page", ITEMS_PER_PAGE),
            ],
        )?;

        if !response.ok {
            return Ok(None);
        }

        let page: Page<PackageMatch> = serde_json::from_str(&response.body)?;
        Ok(page.items.into_iter().next())
    }

    fn first_project(&self, name: &str) -> Result<Option<ProjectMatch>> {
        let url = format!("{}/projects/", self.api_base);
        let response = self
            .http
            .get(&url, &[("name", name), ("items_per_page", ITEMS_PER_PAGE)])?;

        if !response.ok {
            return Ok(None);
        }

        let page: Page<ProjectMatch> = serde_json::from_str(&response.body)?;
        Ok(page.items.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::http::HttpResponse;
    use crate::UpstreamError;

    use super::*;

    #[derive(Clone, Copy)]
    enum Reply {
        Json(&'static str),
        NotFound,
        ConnectionRefused,
    }

    struct MockHttp {
        packages: Reply,
        projects: Reply,
        calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
    }

    impl MockHttp {
        fn new(packages: Reply, projects: Reply) -> Self {
            Self {
                packages,
                projects,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        fn query_param(&self, call: usize, key: &str) -> Option<String> {
            self.calls.borrow().get(call).and_then(|(_, query)| {
                query
                    .iter()
                    .find(|(name, _)| name == key)
                    .map(|(_, value)| value.clone())
            })
        }
    }

    impl HttpGet for MockHttp {
        fn get(&self, url: &str, query: &[(&str, &str)]) -> crate::Result<HttpResponse> {
            let recorded = query
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect();
            self.calls.borrow_mut().push((url.to_string(), recorded));

            let reply = if url.ends_with("/packages/") {
                self.packages
            } else {
                self.projects
            };

            match reply {
                Reply::Json(body) => Ok(HttpResponse {
                    ok: true,
                    body: body.to_string(),
                }),
                Reply::NotFound => Ok(HttpResponse {
                    ok: false,
                    body: String::new(),
                }),
                Reply::ConnectionRefused => Err(UpstreamError::Transport(Box::new(
                    std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
                ))),
            }
        }
    }

    const PACKAGE_PAGE: &str = r#"{"items": [{"distribution": "Fedora", "name": "python-requests", "project": "requests"}]}"#;
    const PROJECT_PAGE: &str = r#"{"items": [{"name": "requests", "version": "2.32.3"}]}"#;

    fn resolver(http: MockHttp) -> UpstreamResolver<MockHttp> {
        UpstreamResolver::with_api_base(http, "http://mock/api/v2")
    }

    #[test]
    fn empty_package_name_makes_no_calls() {
        let resolver = resolver(MockHttp::new(
            Reply::Json(PACKAGE_PAGE),
            Reply::Json(PROJECT_PAGE),
        ));

        let version = resolver.resolve("").expect("resolve");

        assert_eq!(version, None);
        assert_eq!(resolver.http.call_count(), 0);
    }

    #[test]
    fn both_stages_yield_the_upstream_version() {
        let resolver = resolver(MockHttp::new(
            Reply::Json(PACKAGE_PAGE),
            Reply::Json(PROJECT_PAGE),
        ));

        let version = resolver.resolve("python-requests").expect("resolve");

        assert_eq!(version.as_deref(), Some("2.32.3"));
        assert_eq!(resolver.http.call_count(), 2);
        assert_eq!(
            resolver.http.query_param(1, "name").as_deref(),
            Some("requests")
        );
    }

    #[test]
    fn missing_mapping_falls_back_to_the_package_name() {
        let resolver = resolver(MockHttp::new(
            Reply::Json(r#"{"items": []}"#),
            Reply::Json(PROJECT_PAGE),
        ));

        let version = resolver.resolve("requests").expect("resolve");

        assert_eq!(version.as_deref(), Some("2.32.3"));
        assert_eq!(
            resolver.http.query_param(1, "name").as_deref(),
            Some("requests")
        );
    }

    #[test]
    fn no_match_in_either_stage_is_none() {
        let resolver = resolver(MockHttp::new(
            Reply::Json(r#"{"items": []}"#),
            Reply::Json(r#"{"items": []}"#),
        ));

        assert_eq!(resolver.resolve("unknown").expect("resolve"), None);
        assert_eq!(resolver.http.call_count(), 2);
    }

    #[test]
    fn non_success_responses_are_no_data() {
        let resolver = resolver(MockHttp::new(Reply::NotFound, Reply::NotFound));
        assert_eq!(resolver.resolve("requests").expect("resolve"), None);
    }

    #[test]
    fn packages_stage_transport_failure_propagates() {
        let resolver = resolver(MockHttp::new(
            Reply::ConnectionRefused,
            Reply::Json(PROJECT_PAGE),
        ));

        let result = resolver.resolve("requests");

        assert!(matches!(result, Err(UpstreamError::Transport(_))));
        assert_eq!(resolver.http.call_count(), 1);
    }

    #[test]
    fn projects_stage_transport_failure_is_swallowed() {
        let resolver = resolver(MockHttp::new(
            Reply::Json(PACKAGE_PAGE),
            Reply::ConnectionRefused,
        ));

        assert_eq!(resolver.resolve("python-requests").expect("resolve"), None);
        assert_eq!(resolver.http.call_count(), 2);
    }

    #[test]
    fn project_without_a_version_field_is_none() {
        let resolver = resolver(MockHttp::new(
            Reply::Json(PACKAGE_PAGE),
            Reply::Json(r#"{"items": [{"name": "requests"}]}"#),
        ));

        assert_eq!(resolver.resolve("python-requests").expect("resolve"), None);
    }

    #[test]
    fn distribution_filter_is_sent_on_the_packages_stage() {
        let resolver = resolver(MockHttp::new(
            Reply::Json(PACKAGE_PAGE),
            Reply::Json(PROJECT_PAGE),
        ));

        resolver.resolve("python-requests").expect("resolve");

        assert_eq!(
            resolver.http.query_param(0, "distribution").as_deref(),
            Some("Fedora")
        );
        assert_eq!(
            resolver.http.query_param(0, "items_per_page").as_deref(),
            Some("1")
        );
    }
}
