//! `LocatorRequest` document builder.
//!
//! The endpoint validates element order against its schema, so the write
//! sequence below is fixed. `MaximumListSize` is written twice on purpose.

use upsloc_core::{Address, SearchOptions, SearchRadius};

use crate::access::TransactionReference;
use crate::error::LocatorError;
use crate::xml::DocumentWriter;

const TOOL_VERSION: &str = "1";
const REQUEST_ACTION: &str = "Locator";
/// `xml:lang` on the root element. Independent of `SearchOptions::locale`.
const DOCUMENT_LANG: &str = "en-US";

/// Render a Locator search request.
///
/// Pure: the only varying content is the supplied `transaction`, so the same
/// inputs always produce byte-identical output.
///
/// # Errors
///
/// Returns [`LocatorError::Encode`] if the document cannot be written.
pub fn build_locator_request(
    transaction: &TransactionReference,
    address: &Address,
    radius: &SearchRadius,
    options: &SearchOptions,
) -> Result<String, LocatorError> {
    let max_list_size = options.max_list_size.to_string();

    let mut doc = DocumentWriter::new("LocatorRequest")?;
    doc.open_with_lang("LocatorRequest", DOCUMENT_LANG)?;

    doc.open("Request")?;
    transaction.write(&mut doc)?;
    doc.leaf("ToolVersion", TOOL_VERSION)?;
    doc.leaf("RequestAction", REQUEST_ACTION)?;
    doc.leaf("RequestOption", &options.request_option.to_string())?;
    doc.close("Request")?;

    doc.open("Translate")?;
    doc.leaf("LanguageCode", &options.language_code)?;
    doc.leaf("Local", &options.locale)?;
    doc.close("Translate")?;

    doc.open("LocationSearchCriteria")?;
    doc.leaf("MaximumListSize", &max_list_size)?;
    doc.leaf("SearchRadius", &radius.radius().to_string())?;
    doc.close("LocationSearchCriteria")?;

    doc.open("OriginAddress")?;
    doc.open("AddressKeyFormat")?;
    write_address(&mut doc, address)?;
    doc.leaf("MaximumListSize", &max_list_size)?;
    doc.close("AddressKeyFormat")?;
    doc.close("OriginAddress")?;

    doc.open("UnitOfMeasurement")?;
    doc.leaf("Code", radius.unit().code())?;
    doc.close("UnitOfMeasurement")?;

    doc.close("LocatorRequest")?;

    let xml = doc.finish()?;
    tracing::debug!(
        bytes = xml.len(),
        request_option = %options.request_option,
        "built LocatorRequest document"
    );
    Ok(xml)
}

fn write_address(doc: &mut DocumentWriter, address: &Address) -> Result<(), LocatorError> {
    let fields = [
        ("BuildingName", &address.building_name),
        ("AddressLine", &address.address_line1),
        ("AddressLine2", &address.address_line2),
        ("AddressLine3", &address.address_line3),
        ("PoliticalDivision2", &address.state_province_code),
        ("PoliticalDivision1", &address.city),
        ("CountryCode", &address.country_code),
        ("PostcodePrimaryLow", &address.postal_code),
    ];
    for (name, value) in fields {
        doc.leaf(name, value.as_deref().unwrap_or_default())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use upsloc_core::{DistanceUnit, RequestOption};

    use super::*;

    fn sample_address() -> Address {
        Address {
            attention_name: Some("Receiving".to_string()),
            building_name: Some("Tower B".to_string()),
            address_line1: Some("55 Glenlake Pkwy NE".to_string()),
            address_line2: Some(String::new()),
            address_line3: None,
            city: Some("Atlanta".to_string()),
            state_province_code: Some("GA".to_string()),
            country_code: Some("US".to_string()),
            postal_code: Some("30328".to_string()),
        }
    }

    fn render(address: &Address, radius: &SearchRadius, options: &SearchOptions) -> String {
        build_locator_request(&TransactionReference::new("ctx-1"), address, radius, options)
            .expect("should render request")
    }

    fn position(xml: &str, needle: &str) -> usize {
        xml.find(needle)
            .unwrap_or_else(|| panic!("missing {needle} in:\n{xml}"))
    }

    #[test]
    fn output_is_deterministic() {
        let address = sample_address();
        let radius = SearchRadius::new(25, DistanceUnit::Miles);
        let options = SearchOptions::default();
        let first = render(&address, &radius, &options);
        let second = render(&address, &radius, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn top_level_blocks_are_in_schema_order() {
        let xml = render(
            &sample_address(),
            &SearchRadius::new(5, DistanceUnit::Kilometers),
            &SearchOptions::default(),
        );

        let order = [
            r#"<LocatorRequest xml:lang="en-US">"#,
            "<Request>",
            "<TransactionReference>",
            "<CustomerContext>ctx-1</CustomerContext>",
            "<ToolVersion>1</ToolVersion>",
            "<RequestAction>Locator</RequestAction>",
            "<RequestOption>1</RequestOption>",
            "<Translate>",
            "<LanguageCode>eng</LanguageCode>",
            "<Local>en-US</Local>",
            "<LocationSearchCriteria>",
            "<SearchRadius>5</SearchRadius>",
            "<OriginAddress>",
            "<AddressKeyFormat>",
            "<UnitOfMeasurement>",
            "<Code>KM</Code>",
            "</LocatorRequest>",
        ];
        let positions: Vec<usize> = order.iter().map(|n| position(&xml, n)).collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "blocks out of order:\n{xml}"
        );
    }

    #[test]
    fn address_fields_follow_key_format_order() {
        let xml = render(
            &sample_address(),
            &SearchRadius::new(5, DistanceUnit::Kilometers),
            &SearchOptions::default(),
        );

        let order = [
            "<BuildingName>Tower B</BuildingName>",
            "<AddressLine>55 Glenlake Pkwy NE</AddressLine>",
            "<AddressLine2></AddressLine2>",
            "<AddressLine3></AddressLine3>",
            "<PoliticalDivision2>GA</PoliticalDivision2>",
            "<PoliticalDivision1>Atlanta</PoliticalDivision1>",
            "<CountryCode>US</CountryCode>",
            "<PostcodePrimaryLow>30328</PostcodePrimaryLow>",
            "</AddressKeyFormat>",
        ];
        let start = position(&xml, "<AddressKeyFormat>");
        let positions: Vec<usize> = order.iter().map(|n| position(&xml, n)).collect();
        assert!(positions[0] > start);
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "address fields out of order:\n{xml}"
        );
    }

    #[test]
    fn empty_address_still_writes_every_element() {
        let xml = render(
            &Address::default(),
            &SearchRadius::new(5, DistanceUnit::Kilometers),
            &SearchOptions::default(),
        );
        for name in [
            "BuildingName",
            "AddressLine",
            "AddressLine2",
            "AddressLine3",
            "PoliticalDivision2",
            "PoliticalDivision1",
            "CountryCode",
            "PostcodePrimaryLow",
        ] {
            let empty = format!("<{name}></{name}>");
            assert!(xml.contains(&empty), "missing {empty} in:\n{xml}");
        }
    }

    #[test]
    fn attention_name_is_not_written() {
        let xml = render(
            &sample_address(),
            &SearchRadius::new(5, DistanceUnit::Kilometers),
            &SearchOptions::default(),
        );
        assert!(!xml.contains("Receiving"), "attention name leaked:\n{xml}");
        assert!(!xml.contains("ConsigneeName"));
    }

    #[test]
    fn maximum_list_size_appears_twice_with_same_value() {
        let options = SearchOptions {
            max_list_size: 42,
            ..SearchOptions::default()
        };
        let xml = render(
            &sample_address(),
            &SearchRadius::new(5, DistanceUnit::Kilometers),
            &options,
        );

        assert_eq!(xml.matches("<MaximumListSize>42</MaximumListSize>").count(), 2);
        assert_eq!(xml.matches("<MaximumListSize>").count(), 2);

        let criteria = position(&xml, "<LocationSearchCriteria>");
        let key_format = position(&xml, "<AddressKeyFormat>");
        let first = position(&xml, "<MaximumListSize>42</MaximumListSize>");
        let last = xml.rfind("<MaximumListSize>42</MaximumListSize>").unwrap();
        assert!(criteria < first && first < key_format && key_format < last);
    }

    #[test]
    fn radius_unit_goes_only_into_unit_of_measurement() {
        let xml = render(
            &sample_address(),
            &SearchRadius::new(12, DistanceUnit::Miles),
            &SearchOptions::default(),
        );
        assert!(xml.contains("<SearchRadius>12</SearchRadius>"));
        assert_eq!(xml.matches("MI").count(), 1, "unit code repeated:\n{xml}");
        assert!(position(&xml, "<Code>MI</Code>") > position(&xml, "<UnitOfMeasurement>"));
    }

    #[test]
    fn locale_changes_translate_but_not_document_lang() {
        let options = SearchOptions {
            request_option: RequestOption::RETAIL_LOCATIONS_AND_PROGRAM_TYPE,
            language_code: "fra".to_string(),
            locale: "fr-CA".to_string(),
            ..SearchOptions::default()
        };
        let xml = render(
            &sample_address(),
            &SearchRadius::new(5, DistanceUnit::Kilometers),
            &options,
        );

        assert!(xml.contains(r#"<LocatorRequest xml:lang="en-US">"#), "got:\n{xml}");
        assert!(xml.contains("<LanguageCode>fra</LanguageCode>"));
        assert!(xml.contains("<Local>fr-CA</Local>"));
        assert!(xml.contains("<RequestOption>48</RequestOption>"));
    }

    #[test]
    fn escapes_markup_in_address_fields() {
        let address = Address {
            building_name: Some("Smith & <Sons>".to_string()),
            ..Address::default()
        };
        let xml = render(
            &address,
            &SearchRadius::new(5, DistanceUnit::Kilometers),
            &SearchOptions::default(),
        );
        assert!(xml.contains("<BuildingName>Smith &amp; &lt;Sons&gt;</BuildingName>"));
    }
}
