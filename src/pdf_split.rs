// src/pdf_split.rs

use lopdf::Document;
use tracing::info;

/// Split a (possibly multi-page) PDF into an ordered sequence of
/// single-page PDFs, one byte blob per physical page. The vision model
/// is sent one page at a time so multi-page BOLs can be consolidated
/// downstream.
pub fn split_pages(pdf_bytes: &[u8]) -> Result<Vec<Vec<u8>>, Box<dyn std::error::Error>> {
    let doc = Document::load_mem(pdf_bytes)?;
    let page_count = doc.get_pages().len() as u32;
    if page_count == 0 {
        return Err("PDF contains no pages".into());
    }
    info!(pages = page_count, "Splitting PDF");

    let mut pages = Vec::with_capacity(page_count as usize);
    for keep in 1..=page_count {
        let mut single = doc.clone();
        let drop: Vec<u32> = (1..=page_count).filter(|&p| p != keep).collect();
        if !drop.is_empty() {
            single.delete_pages(&drop);
        }
        single.prune_objects();
        single.renumber_objects();
        single.compress();

        let mut buf = Vec::new();
        single.save_to(&mut buf)?;
        pages.push(buf);
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes() {
        assert!(split_pages(b"this is not a pdf").is_err());
    }

    #[test]
    fn test_single_page_round_trips() {
        let minimal = build_minimal_pdf(1);
        let pages = split_pages(&minimal).unwrap();
        assert_eq!(pages.len(), 1);
        // Each emitted blob must itself be a loadable one-page PDF
        let doc = Document::load_mem(&pages[0]).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_multi_page_splits_in_order() {
        let pdf = build_minimal_pdf(3);
        let pages = split_pages(&pdf).unwrap();
        assert_eq!(pages.len(), 3);
        for blob in &pages {
            let doc = Document::load_mem(blob).unwrap();
            assert_eq!(doc.get_pages().len(), 1);
        }
    }

    /// Build an n-page PDF in memory with lopdf primitives.
    fn build_minimal_pdf(n: usize) -> Vec<u8> {
        use lopdf::{Object, ObjectId, Stream, dictionary};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut kids: Vec<Object> = Vec::new();
        for _ in 0..n {
            let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => n as i64,
            }),
        );
        let catalog_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }
}
