use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SparqlResponse<B> {
    pub results: SparqlResults<B>,
}

#[derive(Debug, Deserialize)]
pub struct SparqlResults<B> {
    pub bindings: Vec<B>,
}

/// A single cell of a SPARQL result row. The endpoint wraps every value in
/// an object with datatype metadata; only the value itself matters here.
#[derive(Debug, Deserialize)]
pub struct SparqlValue {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct LocationBinding {
    pub item: SparqlValue,
    #[serde(rename = "itemLabel")]
    pub item_label: SparqlValue,
    #[serde(rename = "itemDescription")]
    pub item_description: Option<SparqlValue>,
    #[serde(rename = "countryLabel")]
    pub country_label: Option<SparqlValue>,
    pub lat: SparqlValue,
    pub lon: SparqlValue,
}

#[derive(Debug, Deserialize)]
pub struct ImageBinding {
    pub image: SparqlValue,
}
