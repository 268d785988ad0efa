use pretty_assertions::assert_eq;

use super::*;
use crate::SlotShape;

#[test]
fn declaration_shapes() {
    assert_eq!(
        Variable::scalar(PrimKind::I32, "a").declaration().as_deref(),
        Some("int32_t a")
    );
    assert_eq!(
        Variable::array(PrimKind::I32, "b", 10).declaration().as_deref(),
        Some("int32_t b [10]")
    );
    assert_eq!(
        Variable::matrix(PrimKind::I32, "c", [10, 10])
            .declaration()
            .as_deref(),
        Some("int32_t c [10][10]")
    );
}

#[test]
fn matrix_dimensions_keep_order() {
    let m = Variable::matrix(PrimKind::F32, "t", [2, 3, 4]);
    assert_eq!(m.declaration().as_deref(), Some("float t [2][3][4]"));
}

#[test]
fn zero_dimension_matrix_renders_without_brackets() {
    let m = Variable::matrix(PrimKind::U8, "empty", []);
    assert_eq!(m.declaration().as_deref(), Some("uint8_t empty"));
}

#[test]
fn indirections_use_pointee_kind() {
    let p = Variable::pointer(Variable::scalar(PrimKind::U32, "sem"));
    assert_eq!(p.declaration().as_deref(), Some("uint32_t * sem"));
    assert_eq!(p.kind(), PrimKind::U32);

    let r = Variable::reference(Variable::array(PrimKind::Fp16b, "tile", 32));
    assert_eq!(r.declaration().as_deref(), Some("uint16_t * tile"));
    assert_eq!(r.name(), Some("tile"));
}

#[test]
fn literals_have_no_name_or_declaration() {
    let lit = Variable::from(Literal::I32(7));
    assert_eq!(lit.name(), None);
    assert_eq!(lit.declaration(), None);
    assert_eq!(lit.reference_text(), "7");

    let ptr = Variable::pointer(lit);
    assert_eq!(ptr.declaration(), None);
}

#[test]
fn placeholders_reference_their_label() {
    let slot = Placeholder::new(PrimKind::I32, SlotShape::Array, 2);
    let var = slot.map(Variable::from);
    assert_eq!(
        var.as_ref().map(Variable::reference_text).as_deref(),
        Some("a_i32_2")
    );
    assert_eq!(
        var.and_then(|v| v.declaration()).as_deref(),
        Some("int32_t a_i32_2 []")
    );
}
