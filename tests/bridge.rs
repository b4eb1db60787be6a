//! End-to-end tests against a live JVM.
//!
//! These are `#[ignore]`d so the suite passes on machines without a JDK.
//! Run them with:
//!
//! ```bash
//! JAVA_HOME=/path/to/jdk cargo test --test bridge -- --ignored
//! ```

use std::sync::Once;

use jcall::prelude::*;

fn jvm() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        try_create_runtime("").expect("JVM bring-up (is JAVA_HOME set?)");
    });
}

#[test]
#[ignore = "requires a JVM (set JAVA_HOME)"]
fn static_call_adds_integers() {
    jvm();
    let result = invoke_static(
        "java.lang.Integer",
        "sum",
        "(II)I",
        &[JvmValue::Int(5), JvmValue::Int(7)],
    );
    assert_eq!(result, Ok(JvmValue::Int(12)));
}

#[test]
#[ignore = "requires a JVM (set JAVA_HOME)"]
fn boxed_arguments_are_unboxed_per_signature() {
    jvm();
    let five = box_value(&JvmValue::Int(5)).expect("box 5");
    assert!(matches!(five, JvmValue::Object(_)));
    let result = invoke_static("java.lang.Integer", "sum", "(II)I", &[five, JvmValue::Int(7)]);
    assert_eq!(result, Ok(JvmValue::Int(12)));
}

#[test]
#[ignore = "requires a JVM (set JAVA_HOME)"]
fn constructor_then_instance_call() {
    jvm();
    let text = box_text("abc").expect("box text");
    let sb = invoke_constructor(
        "java.lang.StringBuilder",
        "(Ljava/lang/String;)V",
        &[text],
    )
    .expect("construct StringBuilder");
    assert!(!is_null_handle(&sb));

    let len = invoke_instance("java.lang.StringBuilder", "length", "()I", &sb, &[]);
    assert_eq!(len, Ok(JvmValue::Int(3)));
}

#[test]
#[ignore = "requires a JVM (set JAVA_HOME)"]
fn text_round_trips_including_supplementary_planes() {
    jvm();
    for text in ["héllo", "plain", "mixed \u{1F600} and \u{10000}"] {
        let boxed = box_text(text).expect("box");
        assert_eq!(unbox_text(&boxed).expect("unbox"), text);
    }
}

#[test]
#[ignore = "requires a JVM (set JAVA_HOME)"]
fn int_array_new_get_length() {
    jvm();
    let arr = array_new("I", &[JvmValue::Int(1), JvmValue::Int(2), JvmValue::Int(3)])
        .expect("array_new");
    assert_eq!(array_length(&arr), Ok(3));
    assert_eq!(array_get(&arr, 1, "I"), Ok(JvmValue::Int(2)));
    assert_eq!(array_get(&arr, 2, "I"), Ok(JvmValue::Int(3)));
}

#[test]
#[ignore = "requires a JVM (set JAVA_HOME)"]
fn object_array_holds_strings() {
    jvm();
    let a = box_text("a").unwrap();
    let b = box_text("b").unwrap();
    let arr = array_new("Ljava/lang/String;", &[a, b]).expect("array_new");
    assert_eq!(array_length(&arr), Ok(2));
    let second = array_get(&arr, 1, "Ljava/lang/String;").expect("array_get");
    assert_eq!(unbox_text(&second).expect("unbox"), "b");
}

#[test]
#[ignore = "requires a JVM (set JAVA_HOME)"]
fn thrown_exception_comes_back_as_err_and_is_cleared() {
    jvm();
    let bad = box_text("not a number").unwrap();
    let result = invoke_static(
        "java.lang.Integer",
        "parseInt",
        "(Ljava/lang/String;)I",
        &[bad],
    );
    match result {
        Err(BridgeError::JavaException(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected JavaException, got {other:?}"),
    }

    // The pending exception must have been cleared: an unrelated call on
    // the same thread succeeds.
    let sum = invoke_static(
        "java.lang.Integer",
        "sum",
        "(II)I",
        &[JvmValue::Int(1), JvmValue::Int(2)],
    );
    assert_eq!(sum, Ok(JvmValue::Int(3)));
}

#[test]
#[ignore = "requires a JVM (set JAVA_HOME)"]
fn missing_member_is_an_error_not_a_crash() {
    jvm();
    let result = invoke_static("java.lang.Integer", "noSuchMethod", "()V", &[]);
    assert!(matches!(result, Err(BridgeError::MemberNotFound(_))));

    let result = invoke_static("no.such.Klass", "anything", "()V", &[]);
    assert!(matches!(result, Err(BridgeError::MemberNotFound(_))));

    // And the thread is still usable.
    let sum = invoke_static(
        "java.lang.Integer",
        "sum",
        "(II)I",
        &[JvmValue::Int(2), JvmValue::Int(2)],
    );
    assert_eq!(sum, Ok(JvmValue::Int(4)));
}

#[test]
#[ignore = "requires a JVM (set JAVA_HOME)"]
fn static_field_read() {
    jvm();
    let max = get_static_field("java.lang.Integer", "MAX_VALUE", "I");
    assert_eq!(max, Ok(JvmValue::Int(i32::MAX)));
}

#[test]
#[ignore = "requires a JVM with the java.desktop module"]
fn instance_field_read_and_write() {
    jvm();
    let point = invoke_constructor(
        "java.awt.Point",
        "(II)V",
        &[JvmValue::Int(3), JvmValue::Int(4)],
    )
    .expect("construct Point");

    assert_eq!(get_field(&point, "x", "I"), Ok(JvmValue::Int(3)));
    assert_eq!(get_field(&point, "y", "I"), Ok(JvmValue::Int(4)));

    set_field(&point, "x", &JvmValue::Int(9), "I").expect("set x");
    assert_eq!(get_field(&point, "x", "I"), Ok(JvmValue::Int(9)));
}

#[test]
#[ignore = "requires a JVM (set JAVA_HOME)"]
fn arity_mismatch_is_reported() {
    jvm();
    let result = invoke_static("java.lang.Integer", "sum", "(II)I", &[JvmValue::Int(5)]);
    assert!(matches!(
        result,
        Err(BridgeError::ArityMismatch { expected: 2, got: 1 })
    ));
}

#[test]
#[ignore = "requires a JVM (set JAVA_HOME)"]
fn null_handle_detection() {
    jvm();
    assert!(is_null_handle(&JvmValue::null()));
    assert!(!is_null_handle(&JvmValue::Int(0)));
    let s = box_text("x").unwrap();
    assert!(!is_null_handle(&s));
}

#[test]
#[ignore = "requires a JVM (set JAVA_HOME)"]
fn calls_work_from_multiple_native_threads() {
    jvm();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let r = invoke_static(
                    "java.lang.Integer",
                    "sum",
                    "(II)I",
                    &[JvmValue::Int(i), JvmValue::Int(i)],
                );
                assert_eq!(r, Ok(JvmValue::Int(i * 2)));
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker thread");
    }
}
