//! DDoc template synthesis.
//!
//! Builds the macro-definition document every renderer invocation consumes:
//! a fixed presentation-macro library, the project macros, the page skeleton
//! (the `DDOC` macro itself), a navigation block linking every discovered
//! module, and the footer. The document is written to
//! [`TEMPLATE_FILE`] inside the output directory and lives only for the
//! duration of one build.
//!
//! The renderer fills in `$(TITLE)` and `$(BODY)` per page; everything else
//! is shared, which is what keeps all generated pages cross-linked and
//! visually consistent.

use crate::config::{ExternalLink, ProjectInfo};
use crate::naming;

/// File name of the transient template inside the output directory.
pub const TEMPLATE_FILE: &str = "AUTODDOC_TEMPLATE.ddoc";

/// The fixed presentation-macro library the renderer expects.
const MACRO_LIBRARY: &str = include_str!("../static/macros.ddoc");

const PAGE_HEADER: &str = "\n<html lang='en'>\n\
<head>\n\
<meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\" >\n\
<title>$(TITLE) - $(PROJECT_NAME) $(PROJECT_VERSION) API documentation</title>\n\
<link rel=\"stylesheet\" type=\"text/css\" href=\"css/style.css\">\n\
</head>\n\n";

const PAGE_FOOTER: &str = "\n<div id=\"copyright\">\n\
$(COPYRIGHT) |\n\
Page generated by AutoDDoc and $(LINK2 http://www.digitalmars.com/d/2.0/ddoc.html, Ddoc).\n\
</div>\n\n";

/// Assemble the template document for one build.
///
/// `sources` must already be in final order: the navigation block emits one
/// module link per entry, in that order, and the orchestrator renders pages
/// in the same order, so every generated page is reachable from navigation.
pub fn assemble(
    project: &ProjectInfo,
    sources: &[String],
    links: &[ExternalLink],
) -> String {
    let mut doc = String::from(MACRO_LIBRARY);

    // Project macros. An empty copyright yields an empty macro value, never
    // the bare prefix.
    doc.push_str(&format!("PROJECT_NAME= {}\n", project.name));
    doc.push_str(&format!("PROJECT_VERSION= {}\n", project.version));
    doc.push_str("COPYRIGHT= ");
    if !project.copyright.is_empty() {
        doc.push_str(&format!("Copyright © {}", project.copyright));
    }
    doc.push('\n');

    // The DDOC macro is the page skeleton itself, built from the macros
    // above and filled in per page by the renderer.
    doc.push_str(
        "DDOC = <!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\"\n        \"http://www.w3.org/TR/html4/strict.dtd\">\n",
    );
    doc.push_str(PAGE_HEADER);
    doc.push_str("<body>");
    doc.push_str(&page_top(project));
    doc.push_str(&navigation(sources, links));
    doc.push_str("<div id=\"content\">\n<h1>$(TITLE)</h1>\n$(BODY)\n</div>\n");
    doc.push_str(PAGE_FOOTER);
    doc.push_str("</body>\n</html>\n");
    doc
}

/// Heading bar with the main-page link and the logo, if one is configured.
fn page_top(project: &ProjectInfo) -> String {
    let mut top = String::from("<div id=\"top\">\n<div id=\"header\">\n");
    if !project.logo.is_empty() {
        top.push_str(&format!(
            "<img id=\"logo\" alt=\"{} logo\" src=\"images/logo.png\">",
            project.name
        ));
    }
    top.push_str(
        "<a id=\"main-heading\" href=\"index.html\">$(PROJECT_NAME) $(PROJECT_VERSION) API documentation</a>\n</div>\n</div>\n\n",
    );
    top
}

/// Navigation sidebar: user links first, then the main page, then one link
/// per module in source order.
fn navigation(sources: &[String], links: &[ExternalLink]) -> String {
    let mut nav = String::from(
        "<div id=\"navigation\">\n<div class=\"navblock\">\n<div id=\"toctop\">\n$(UL\n",
    );
    for link in links {
        nav.push_str(&format!("$(LI $(LINK2 {}, {}))\n", link.url, link.label));
    }
    nav.push_str(")\n</div>\n</div>\n");

    nav.push_str("<div class=\"navblock\">\n$(UL\n");
    nav.push_str("$(LI $(LINK2 index.html, Main page))\n");
    for source in sources {
        let module = naming::module_name(source);
        nav.push_str(&format!("$(LI $(LINK2 {module}.html,{module}))\n"));
    }
    nav.push_str(")\n</div>\n</div>\n\n");
    nav
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> ProjectInfo {
        ProjectInfo {
            name: "Demo".to_string(),
            version: "1.0".to_string(),
            copyright: String::new(),
            logo: String::new(),
        }
    }

    fn sources(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    /// The COPYRIGHT macro line of an assembled document.
    fn copyright_line(doc: &str) -> &str {
        doc.lines()
            .find(|line| line.starts_with("COPYRIGHT="))
            .unwrap()
    }

    #[test]
    fn macro_library_comes_first() {
        let doc = assemble(&project(), &[], &[]);
        assert!(doc.starts_with(MACRO_LIBRARY));
    }

    #[test]
    fn project_macros_present() {
        let doc = assemble(&project(), &[], &[]);
        assert!(doc.contains("PROJECT_NAME= Demo\n"));
        assert!(doc.contains("PROJECT_VERSION= 1.0\n"));
    }

    #[test]
    fn empty_copyright_has_no_prefix() {
        let doc = assemble(&project(), &[], &[]);
        assert_eq!(copyright_line(&doc), "COPYRIGHT= ");
    }

    #[test]
    fn copyright_value_is_prefixed() {
        let mut project = project();
        project.copyright = "Jane 2020".to_string();
        let doc = assemble(&project, &[], &[]);
        assert_eq!(copyright_line(&doc), "COPYRIGHT= Copyright © Jane 2020");
    }

    #[test]
    fn one_module_link_per_source_in_order() {
        let sources = sources(&["a.d", "pkg/b.dd", "pkg/sub/c.d"]);
        let doc = assemble(&project(), &sources, &[]);

        let a = doc.find("$(LI $(LINK2 a.html,a))").unwrap();
        let b = doc.find("$(LI $(LINK2 pkg.b.html,pkg.b))").unwrap();
        let c = doc.find("$(LI $(LINK2 pkg.sub.c.html,pkg.sub.c))").unwrap();
        assert!(a < b && b < c);

        let link_count = doc.matches("$(LI $(LINK2 ").count();
        // Main page link plus one per module
        assert_eq!(link_count, 1 + sources.len());
    }

    #[test]
    fn external_links_precede_main_page_and_modules() {
        let sources = sources(&["a.d"]);
        let links = vec![
            ExternalLink {
                url: "http://dlang.org".to_string(),
                label: "DLang".to_string(),
            },
            ExternalLink {
                url: "http://www.google.com".to_string(),
                label: "Google".to_string(),
            },
        ];
        let doc = assemble(&project(), &sources, &links);

        let dlang = doc.find("$(LI $(LINK2 http://dlang.org, DLang))").unwrap();
        let google = doc
            .find("$(LI $(LINK2 http://www.google.com, Google))")
            .unwrap();
        let main_page = doc.find("$(LI $(LINK2 index.html, Main page))").unwrap();
        let module = doc.find("$(LI $(LINK2 a.html,a))").unwrap();

        assert!(dlang < google);
        assert!(google < main_page);
        assert!(main_page < module);
    }

    #[test]
    fn main_page_link_always_present() {
        let doc = assemble(&project(), &[], &[]);
        assert!(doc.contains("$(LI $(LINK2 index.html, Main page))"));
    }

    #[test]
    fn logo_element_only_when_configured() {
        let doc = assemble(&project(), &[], &[]);
        assert!(!doc.contains("img id=\"logo\""));

        let mut with_logo = project();
        with_logo.logo = "logo.png".to_string();
        let doc = assemble(&with_logo, &[], &[]);
        assert!(doc.contains("<img id=\"logo\" alt=\"Demo logo\" src=\"images/logo.png\">"));
    }

    #[test]
    fn page_skeleton_has_title_and_body_placeholders() {
        let doc = assemble(&project(), &[], &[]);
        assert!(doc.contains("<h1>$(TITLE)</h1>"));
        assert!(doc.contains("$(BODY)"));
        assert!(doc.contains("href=\"css/style.css\""));
    }

    #[test]
    fn footer_references_copyright_macro() {
        let doc = assemble(&project(), &[], &[]);
        assert!(doc.contains("$(COPYRIGHT) |"));
        assert!(doc.contains("Page generated by AutoDDoc"));
    }

    #[test]
    fn assemble_is_pure() {
        let sources = sources(&["a.d", "pkg/b.dd"]);
        let first = assemble(&project(), &sources, &[]);
        let second = assemble(&project(), &sources, &[]);
        assert_eq!(first, second);
    }
}
