use jcall::{JObject, JvmValue};

#[test]
fn primitives_lower_into_the_matching_union_member() {
    unsafe {
        assert_eq!(JvmValue::Bool(true).to_jvalue().z, 1);
        assert_eq!(JvmValue::Byte(-5).to_jvalue().b, -5);
        assert_eq!(JvmValue::Char(0x2764).to_jvalue().c, 0x2764);
        assert_eq!(JvmValue::Short(-300).to_jvalue().s, -300);
        assert_eq!(JvmValue::Int(123456).to_jvalue().i, 123456);
        assert_eq!(JvmValue::Long(1 << 40).to_jvalue().j, 1 << 40);
        assert_eq!(JvmValue::Float(1.5).to_jvalue().f, 1.5);
        assert_eq!(JvmValue::Double(-2.25).to_jvalue().d, -2.25);
    }
}

#[test]
fn null_object_round_trip() {
    let v = JvmValue::null();
    assert!(v.is_null_object());
    assert_eq!(v.as_object(), Some(JObject::NULL));
    unsafe {
        assert!(v.to_jvalue().l.is_null());
    }
}

#[test]
fn primitives_are_not_null_objects() {
    assert!(!JvmValue::Int(0).is_null_object());
    assert_eq!(JvmValue::Int(0).as_object(), None);
}

#[test]
fn from_impls_pick_the_right_variant() {
    assert_eq!(JvmValue::from(true), JvmValue::Bool(true));
    assert_eq!(JvmValue::from(-1i8), JvmValue::Byte(-1));
    assert_eq!(JvmValue::from(7u16), JvmValue::Char(7));
    assert_eq!(JvmValue::from(-7i16), JvmValue::Short(-7));
    assert_eq!(JvmValue::from(42i32), JvmValue::Int(42));
    assert_eq!(JvmValue::from(42i64), JvmValue::Long(42));
    assert_eq!(JvmValue::from(0.5f32), JvmValue::Float(0.5));
    assert_eq!(JvmValue::from(0.5f64), JvmValue::Double(0.5));
}

#[test]
fn display_is_compact() {
    assert_eq!(JvmValue::Int(12).to_string(), "12");
    assert_eq!(JvmValue::null().to_string(), "null");
    assert_eq!(JvmValue::Void.to_string(), "void");
}
