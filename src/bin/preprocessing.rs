use polars::prelude::*;
use std::fs::File;

const VOCABULARY_PATH: &str = "drugbank_vocabulary.csv";
const LOOKUP_PATH: &str = "drug_lookup.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Keep only the two columns the lookup needs; the vocabulary export also
    // carries accession numbers, CAS, UNII, synonyms and InChI keys.
    let mut lookup = LazyCsvReader::new(VOCABULARY_PATH)
        .has_header(true)
        .finish()?
        .select([col("DrugBank ID"), col("Common name")])
        .drop_nulls(None)
        .filter(col("Common name").neq(lit("")))
        // A repeated ID keeps its last name, as the loader does.
        .unique_stable(
            Some(vec!["DrugBank ID".to_string()]),
            UniqueKeepStrategy::Last,
        )
        .collect()?;

    // print the first 5 rows
    println!("{:?}", lookup.head(Some(5)));
    println!("Number of drugs with a common name: {}", lookup.height());

    let mut file = File::create(LOOKUP_PATH)?;
    CsvWriter::new(&mut file).finish(&mut lookup)?;

    Ok(())
}
