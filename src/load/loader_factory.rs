use crate::config::ExportFormat;
use crate::load::excel_loader::ExcelLoader;
use crate::load::traits::Loadable;
use crate::load::tsv_loader::TsvLoader;

pub struct LoaderFactory;

impl LoaderFactory {
    pub fn loader(format: ExportFormat, create_dir: bool) -> Box<dyn Loadable> {
        match format {
            ExportFormat::Excel => Box::new(ExcelLoader::new(create_dir)),
            ExportFormat::Tsv => Box::new(TsvLoader::new(create_dir)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ExportFormat::Excel)]
    #[case(ExportFormat::Tsv)]
    fn test_loader_matches_format_extension(#[case] format: ExportFormat) {
        assert_eq!(
            LoaderFactory::loader(format, false).extension(),
            format.extension()
        );
    }
}
