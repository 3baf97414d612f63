//! Rule table for the theme checks.
//!
//! Each rule carries its severity as the wire-form string the classifier
//! validates, the human rule text rendered in the report, and whether the
//! rule belongs to the cheap structural pre-check set.

/// Declarative metadata for one check.
pub struct Rule {
    pub code: &'static str,
    pub level: &'static str,
    pub rule: &'static str,
    /// Included when only the pre-check subset is requested.
    pub pre: bool,
}

pub const PJ_REQ: Rule = Rule {
    code: "GS010-PJ-REQ",
    level: "error",
    rule: "package.json file is missing",
    pre: true,
};

pub const PJ_PARSE: Rule = Rule {
    code: "GS010-PJ-PARSE",
    level: "error",
    rule: "package.json file can not be parsed",
    pre: true,
};

pub const PJ_NAME: Rule = Rule {
    code: "GS010-PJ-NAME",
    level: "warning",
    rule: "package.json is missing a \"name\" field",
    pre: true,
};

pub const PJ_VERSION: Rule = Rule {
    code: "GS010-PJ-VERSION",
    level: "warning",
    rule: "package.json is missing a \"version\" field",
    pre: true,
};

pub const INDEX_REQ: Rule = Rule {
    code: "GS020-INDEX-REQ",
    level: "error",
    rule: "index.hbs template is missing",
    pre: true,
};

pub const POST_REQ: Rule = Rule {
    code: "GS020-POST-REQ",
    level: "error",
    rule: "post.hbs template is missing",
    pre: true,
};

pub const DEF_REC: Rule = Rule {
    code: "GS020-DEF-REC",
    level: "recommendation",
    rule: "Provide a default.hbs layout for your theme",
    pre: true,
};

pub const ASSET_REC: Rule = Rule {
    code: "GS030-ASSET-REC",
    level: "recommendation",
    rule: "Organize stylesheets, scripts and images under an assets/ folder",
    pre: false,
};

pub const DEPR_PURL: Rule = Rule {
    code: "GS001-DEPR-PURL",
    level: "warning",
    rule: "Replace the deprecated {{pageUrl}} helper with {{page_url}}",
    pre: false,
};

pub const DEPR_IMG: Rule = Rule {
    code: "GS001-DEPR-IMG",
    level: "warning",
    rule: "Replace the deprecated {{image}} helper with {{img_url}}",
    pre: false,
};

pub const PARTIALS: Rule = Rule {
    code: "GS050-PARTIALS",
    level: "feature",
    rule: "Theme provides custom partials",
    pre: false,
};
