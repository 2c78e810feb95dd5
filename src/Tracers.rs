/// Quality control of hydrographic profile exports: renaming of the export columns, selection of
/// samples with good quality flags, N* tracer, CSV output
pub mod profile_cleaning;
/// TEOS-10 Conservative Temperature, in situ density and sigma0 of the samples
pub mod seawater;
