use gcmkit_vectors::emit::{c_byte_array, kat_byte_list};
use gcmkit_vectors::{FieldError, GcmField, GcmRecord, RawRecord};

fn raw(pairs: &[(&str, &str)]) -> RawRecord {
    let mut r = RawRecord::default();
    for (k, v) in pairs {
        r.insert(k, v);
    }
    r
}

#[test]
fn test_decode_absent_vs_empty() {
    let r = raw(&[("Key", "00ff"), ("IV", "01"), ("PT", ""), ("Tag", "aa"), ("Count", "7")]);
    let rec = GcmRecord::decode(&r).unwrap();
    assert_eq!(rec.key.as_deref(), Some(&[0x00, 0xFF][..]));
    assert_eq!(rec.aad, None);
    assert_eq!(rec.pt, Some(vec![]));
    assert_eq!(rec.aad_len(), 0);
    assert_eq!(rec.pt_len(), 0);
    assert_eq!(rec.tag_len(), 1);
}

#[test]
fn test_key_and_iv_may_be_absent() {
    let rec = GcmRecord::decode(&raw(&[("Tag", "00")])).unwrap();
    assert_eq!(rec.get(GcmField::Key), None);
    assert_eq!(rec.get(GcmField::Iv), None);
    assert_eq!(rec.tag_len(), 1);

    // Tag is the only field whose absence is fatal.
    for field in GcmField::ALL {
        assert_eq!(field.is_required(), field == GcmField::Tag, "{:?}", field);
    }
}

#[test]
fn test_decode_errors_in_field_order() {
    let r = raw(&[("Key", "0011gg"), ("IV", "abc"), ("Tag", "00")]);
    match GcmRecord::decode(&r) {
        Err(FieldError::Hex { field, .. }) => assert_eq!(field, "Key"),
        other => panic!("unexpected {:?}", other),
    }

    let r = raw(&[("Key", "00"), ("IV", "abc"), ("Tag", "00")]);
    match GcmRecord::decode(&r) {
        Err(FieldError::Hex { field, source }) => {
            assert_eq!(field, "IV");
            assert_eq!(source, hex::FromHexError::OddLength);
        }
        other => panic!("unexpected {:?}", other),
    }

    let r = raw(&[("Key", "00"), ("IV", "00")]);
    assert!(matches!(GcmRecord::decode(&r), Err(FieldError::Missing("Tag"))));
}

#[test]
fn test_c_byte_array_forms() {
    assert_eq!(c_byte_array(None), "NULL");
    assert_eq!(c_byte_array(Some(&[])), "(const uint8_t []){ }");
    assert_eq!(c_byte_array(Some(&[0x00, 0xAB])), "(const uint8_t []){ 0x00u, 0xABu, }");
}

#[test]
fn test_kat_byte_list() {
    assert_eq!(kat_byte_list(&[]), "");
    assert_eq!(kat_byte_list(&[0x0F, 0xA0]), "0x0F, 0xA0");
}
