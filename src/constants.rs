// OMIM reference columns, in the order they are retained.
pub const MIM_NUMBER: &str = "MIM Number";
pub const GENE_SYMBOLS: &str = "Gene Symbols";
pub const APPROVED_GENE_SYMBOL: &str = "Approved Gene Symbol";
pub const ENTREZ_GENE_ID: &str = "Entrez Gene ID";
pub const PHENOTYPES: &str = "Phenotypes";

pub const OMIM_COLUMNS: [&str; 5] = [
    MIM_NUMBER,
    GENE_SYMBOLS,
    APPROVED_GENE_SYMBOL,
    ENTREZ_GENE_ID,
    PHENOTYPES,
];

// Report columns.
pub const GENE_SYMBOL: &str = "Gene Symbol";
pub const OMIM_ID: &str = "OMIM ID";
pub const OMIM_GENE: &str = "OMIM Gene";
pub const OMIM_PHENOTYPE: &str = "OMIM Phenotype";
pub const GENE_ID: &str = "Gene ID";
pub const OMIM_LINK: &str = "OMIM Link";
pub const HPO_LINK: &str = "HPO Link";

/// Insertion offsets in the loaded report schema. The review spreadsheets
/// downstream rely on these positions.
pub const GENE_ID_OFFSET: usize = 9;
pub const OMIM_BLOCK_OFFSET: usize = 50;

pub const OMIM_ENTRY_URL: &str = "https://omim.org/entry/";
pub const HPO_GENE_URL: &str = "https://hpo.jax.org/app/browse/gene/";

pub const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
pub const GZIP_EXTENSION: &str = "gz";
pub const REPORT_SEPARATOR: u8 = b'\t';
