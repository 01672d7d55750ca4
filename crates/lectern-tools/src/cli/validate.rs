use crate::cli::opt;
use anyhow::Context;
use lectern_utils::loader::Loader;
use lectern_utils::loader::file_system::FileSystemLoader;

pub(crate) async fn exec(validate: opt::Validate) -> Result<(), anyhow::Error> {
    let opt::Validate { catalog_folder } = validate;
    let folder = std::path::absolute(&catalog_folder)?;

    let loader = Loader::FileSystem(FileSystemLoader::new(folder.clone()));
    let catalog = lectern_config::catalog::load(loader)
        .await
        .with_context(|| format!("invalid catalog in {}", folder.display()))?;

    let lessons: usize = catalog
        .courses()
        .iter()
        .flat_map(|course| &course.sections)
        .map(|section| section.lessons.len())
        .sum();
    println!(
        "{}: {} instructors, {} courses, {lessons} lessons",
        folder.display(),
        catalog.instructors().len(),
        catalog.courses().len(),
    );
    Ok(())
}
