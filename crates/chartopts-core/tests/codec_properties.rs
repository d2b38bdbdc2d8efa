//! Shape-preservation properties of the polymorphic codecs.

use chartopts_core::{
    CategoryData, ColorValue, LegendData, LegendDataItem, ListOrSingle, MarkData, MarkDataItem,
    NumberOrBool, Shape, StringOrBool, StringOrNumber,
};
use rstest::rstest;

#[rstest]
#[case::string(r#""auto""#)]
#[case::integer("12")]
#[case::negative("-3")]
#[case::fraction("0.25")]
fn test_string_or_number_round_trip(#[case] source: &str) -> anyhow::Result<()> {
    let value: StringOrNumber = serde_json::from_str(source)?;
    assert_eq!(serde_json::to_string(&value)?, source);
    Ok(())
}

#[test]
fn test_numeric_string_stays_string() -> anyhow::Result<()> {
    let value: StringOrNumber = serde_json::from_str(r#""12""#)?;
    assert_eq!(value, StringOrNumber::String("12".to_string()));
    assert_eq!(value.as_f64(), None);
    Ok(())
}

#[rstest]
#[case::string(r#""single""#, StringOrBool::String("single".to_string()))]
#[case::truthy("true", StringOrBool::Bool(true))]
#[case::falsy("false", StringOrBool::Bool(false))]
fn test_string_or_bool_decode(#[case] source: &str, #[case] expected: StringOrBool) {
    let value: StringOrBool = serde_json::from_str(source).unwrap();
    assert_eq!(value, expected);
}

#[rstest]
#[case::number("0.5", NumberOrBool::Number(0.5))]
#[case::zero("0", NumberOrBool::Number(0.0))]
#[case::boolean("false", NumberOrBool::Bool(false))]
fn test_number_or_bool_decode(#[case] source: &str, #[case] expected: NumberOrBool) {
    let value: NumberOrBool = serde_json::from_str(source).unwrap();
    assert_eq!(value, expected);
    assert_eq!(serde_json::to_string(&value).unwrap(), source);
}

#[rstest]
#[case::bare_number("5", 1, Shape::Bare)]
#[case::bare_string(r#""10%""#, 1, Shape::Bare)]
#[case::one_element_array("[5]", 1, Shape::Array)]
#[case::three_element_array(r#"[1,"2",3]"#, 3, Shape::Array)]
#[case::empty_array("[]", 0, Shape::Array)]
fn test_list_or_single_keeps_shape(
    #[case] source: &str,
    #[case] len: usize,
    #[case] shape: Shape,
) -> anyhow::Result<()> {
    let list: ListOrSingle<StringOrNumber> = serde_json::from_str(source)?;
    assert_eq!(list.len(), len);
    assert_eq!(list.shape(), shape);
    assert_eq!(serde_json::to_string(&list)?, source);
    Ok(())
}

#[test]
fn test_category_data_styles() -> anyhow::Result<()> {
    let data: CategoryData = serde_json::from_str(r#"["a","b"]"#)?;
    assert_eq!(data.len(), 2);
    assert!(data.iter().all(|item| item.text_style.is_none()));

    let styled: CategoryData =
        serde_json::from_str(r#"[{"value":"a","textStyle":{"color":"red"}}]"#)?;
    let style = styled[0].text_style.as_ref().expect("style kept");
    assert_eq!(style.color, Some(ColorValue::solid("red")));
    Ok(())
}

#[test]
fn test_legend_empty_string_is_a_name() -> anyhow::Result<()> {
    let data: LegendData = serde_json::from_str(r#"["s1","","s2"]"#)?;
    assert_eq!(
        data.to_vec(),
        vec![
            LegendDataItem::name("s1"),
            LegendDataItem::name(""),
            LegendDataItem::name("s2"),
        ]
    );
    Ok(())
}

#[rstest]
#[case::single(r#"[{"type":"max"}]"#, false)]
#[case::pair(r#"[[{"coord":[1,2]},{"coord":[3,4]}]]"#, true)]
fn test_mark_data_shape_sniffing(#[case] source: &str, #[case] is_pair: bool) {
    let data: MarkData = serde_json::from_str(source).unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(matches!(data[0], MarkDataItem::Pair { .. }), is_pair);
    assert_eq!(serde_json::to_string(&data).unwrap(), source);
}

#[rstest]
#[case::one(r#"[[{"coord":[1,2]}]]"#, 1)]
#[case::empty("[[]]", 0)]
#[case::three("[[{},{},{}]]", 3)]
fn test_mark_data_bad_arity(#[case] source: &str, #[case] len: usize) {
    let err = serde_json::from_str::<MarkData>(source).unwrap_err();
    let expected = format!("$[0]: endpoint pair must have exactly 2 elements, found {len}");
    assert!(err.to_string().contains(&expected), "{err}");
}

#[rstest]
#[case::hex(r##""#fff""##)]
#[case::rgba(r#""rgba(0,0,0,0.5)""#)]
#[case::linear(
    r#"{"type":"linear","x":0,"y":0,"x2":0,"y2":1,"colorStops":[{"offset":0,"color":"red"},{"offset":1,"color":"blue"}],"global":false}"#
)]
#[case::radial(
    r#"{"type":"radial","x":0.5,"y":0.5,"r":0.5,"colorStops":[{"offset":0,"color":"red"},{"offset":1,"color":"blue"}]}"#
)]
fn test_color_round_trip(#[case] source: &str) -> anyhow::Result<()> {
    let color: ColorValue = serde_json::from_str(source)?;
    assert_eq!(serde_json::to_string(&color)?, source);
    Ok(())
}

#[test]
fn test_solid_color_decode() {
    let color: ColorValue = serde_json::from_str(r##""#fff""##).unwrap();
    assert_eq!(color, ColorValue::Solid("#fff".to_string()));
}

#[test]
fn test_unknown_color_type_names_kind() {
    let err = serde_json::from_str::<ColorValue>(r#"{"type":"conic"}"#).unwrap_err();
    assert!(err.to_string().contains("unknown color type `conic`"), "{err}");
}
