//! Shared test fixtures for the pageforge test suite.
//!
//! Builders for `Page`/`Section` values so tests state only the fields
//! they care about, plus canned JSON documents under `fixtures/pages/`.

use crate::types::{Page, Section, Seo};

/// A bare page: just a slug, no SEO, no layout, no sections.
pub fn page(slug: &str) -> Page {
    Page {
        slug: slug.to_string(),
        seo: None,
        layout: None,
        sections: Vec::new(),
    }
}

/// A page carrying an SEO block.
pub fn page_with_seo(slug: &str, seo: Seo) -> Page {
    Page {
        seo: Some(seo),
        ..page(slug)
    }
}

/// A page carrying sections.
pub fn page_with_sections(slug: &str, sections: Vec<Section>) -> Page {
    Page {
        sections,
        ..page(slug)
    }
}

/// An SEO block with only title/description set.
pub fn seo(title: Option<&str>, description: Option<&str>) -> Seo {
    Seo {
        title: title.map(String::from),
        description: description.map(String::from),
        open_graph: None,
    }
}

/// A section with the given wire type, optional id, and JSON payload.
///
/// Panics if `payload` is not a JSON object — sections are always objects
/// on the wire.
pub fn section(section_type: &str, section_id: Option<&str>, payload: serde_json::Value) -> Section {
    let serde_json::Value::Object(payload) = payload else {
        panic!("section payload must be a JSON object, got {payload}");
    };
    Section {
        section_type: section_type.to_string(),
        section_id: section_id.map(String::from),
        payload,
    }
}
