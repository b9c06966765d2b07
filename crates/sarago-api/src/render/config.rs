//! Configuration page markup

use super::escape_html;
use crate::context::SiteContext;
use sarago_core::models::Folder;

/// Display name shown when the params row is missing
pub const UNKNOWN_DBNAME: &str = "*unknown*";

/// Product line with version and project link
pub fn about_line() -> String {
    format!(
        "<p class=\"copyrite\">SARemote v{} (<a href=\"{repo}\" target=\"_blank\">{repo}</a>)</p>",
        env!("CARGO_PKG_VERSION"),
        repo = env!("CARGO_PKG_REPOSITORY"),
    )
}

/// Form editing the display name and the folder paths
pub fn config_form(site: &SiteContext, dbname: &str, folders: &[Folder]) -> String {
    let mut html = String::from("<h2>Database configuration</h2><div id=\"dbconfig\">");
    html.push_str(&about_line());
    html.push_str(&format!(
        "<p>Running on <strong>{}</strong> in <strong>{}</strong></p>",
        escape_html(&site.host_name),
        escape_html(&site.working_dir.display().to_string()),
    ));

    html.push_str("<form action=\"config\" method=\"post\">");
    html.push_str("<label for=\"dbname\">DB description: </label>");
    html.push_str(&format!(
        "<input type=\"text\" id=\"dbname\" name=\"dbname\" value=\"{}\">",
        escape_html(dbname)
    ));

    html.push_str("<p>Folders containing voice recordings</p><ul id=\"folderlist\">");
    for folder in folders {
        html.push_str(&format!(
            "<li><input type=\"text\" name=\"folderid\" value=\"{}\" readonly> : \
             <input type=\"text\" name=\"datapath\" value=\"{}\"></li>",
            folder.id,
            escape_html(&folder.path)
        ));
    }
    html.push_str("</ul>");

    html.push_str("<input type=\"submit\" value=\"Update\"></form></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Templates;
    use std::path::PathBuf;

    fn site() -> SiteContext {
        SiteContext {
            templates: Templates::default(),
            page_size: 15,
            host_name: "pbx-01".to_string(),
            working_dir: PathBuf::from("/opt/sarago"),
        }
    }

    #[test]
    fn test_config_form_lists_folders() {
        let folders = vec![Folder::new(1, "/srv/rec1"), Folder::new(2, "D:\\Voice \"B\"")];
        let html = config_form(&site(), "Head office", &folders);

        assert!(html.contains("<strong>pbx-01</strong>"));
        assert!(html.contains("<strong>/opt/sarago</strong>"));
        assert!(html.contains("name=\"dbname\" value=\"Head office\""));
        assert!(html.contains("name=\"folderid\" value=\"1\" readonly"));
        assert!(html.contains("name=\"datapath\" value=\"/srv/rec1\""));
        assert!(html.contains("value=\"D:\\Voice &quot;B&quot;\""));
        assert!(html.contains("SARemote v"));
    }
}
