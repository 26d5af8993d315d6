//! Cross-container scenarios: arrays, builders, and the views they
//! hand out working together.

use loam_buf::{Buf, StrBuf};
use loam_core::{SliceView, StrView};

#[test]
fn array_view_survives_while_buffer_is_borrowed() {
    let mut buf = Buf::new();
    for v in [1u32, 2, 3, 4, 5] {
        buf.push(v).unwrap();
    }
    let view = buf.as_view();
    let middle = view.slice(1, 4);
    assert_eq!(middle.as_slice(), &[2, 3, 4]);
    assert!(view.starts_with(SliceView::new(&[1u32, 2])));
}

#[test]
fn builder_content_flows_through_views_into_another_builder() {
    let mut csv = StrBuf::new();
    csv.push_str("Name,Age,City\n").unwrap();
    csv.push_str("Alice,25,NYC\n").unwrap();
    csv.push_str("Bob,30,LA\n").unwrap();

    // Carve the header out of the finished content.
    let header = csv.as_view().slice(0, 13);
    assert!(header.equals(StrView::from_str("Name,Age,City")));

    let mut copy = StrBuf::with_capacity(4).unwrap();
    copy.push_view(header).unwrap();
    assert_eq!(copy.to_str(), Some("Name,Age,City"));
    assert!(copy.capacity() > 4);
}

#[test]
fn joined_words_inspectable_with_prefix_checks() {
    let words = ["one", "two", "three"];
    let mut sb = StrBuf::new();
    for word in words {
        if !sb.is_empty() {
            sb.push_char(',').unwrap();
        }
        sb.push_str(word).unwrap();
    }
    let result = sb.as_view();
    assert!(result.equals(StrView::from_str("one,two,three")));
    assert!(result.starts_with(StrView::from_str("one")));
    assert!(result.ends_with(StrView::from_str("three")));
}

#[test]
fn growth_and_removal_keep_order_end_to_end() {
    let mut buf = Buf::with_capacity(4).unwrap();
    for v in [10, 20, 30] {
        buf.push(v).unwrap();
    }
    buf.insert(2, 99).unwrap();
    assert_eq!(buf.as_slice(), &[10, 20, 99, 30]);
    assert_eq!(buf.remove(0), Some(10));
    assert_eq!(buf.as_slice(), &[20, 99, 30]);

    // Format the survivors through the string builder.
    let mut sb = StrBuf::new();
    for (i, v) in buf.iter().enumerate() {
        if i > 0 {
            sb.push_char(' ').unwrap();
        }
        sb.push_str(&v.to_string()).unwrap();
    }
    assert_eq!(sb.to_str(), Some("20 99 30"));
}
