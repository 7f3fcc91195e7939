//! Built-in defaults for the three rewrite tools.
//!
//! There is deliberately no config file layer: a run is fully described
//! by its command line, and these constants supply the rest.

/// File extensions treated as site pages, lowercase, without the dot.
pub const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Default scan directory for the parameter replacer.
pub const DEFAULT_PARAM_DIRECTORY: &str = "texts";

/// Default parameter value the replacer looks for.
pub const DEFAULT_OLD_PARAM: &str = "projects";

/// Default replacement parameter value.
pub const DEFAULT_NEW_PARAM: &str = "fiction";

/// jQuery CDN include inserted before `</head>` when no jQuery
/// reference exists anywhere in the file.
pub const JQUERY_SCRIPT_TAG: &str =
    r#"<script src="https://cdnjs.cloudflare.com/ajax/libs/jquery/3.6.0/jquery.min.js"></script>"#;

/// Replacement for the legacy static navbar. The indentation of the
/// matched block is re-applied to every non-empty line on insertion.
pub const NEW_NAVBAR_BLOCK: &str = r#"<!--Navigation bar-->
<div id="navbar"></div>
<script src="../navbar.js"></script>
<script>
$(document).ready(function(){
    loadNavbar('projects')
});
</script>
<!--end of Navigation bar-->"#;
