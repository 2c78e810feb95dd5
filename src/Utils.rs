/// task files, R.txt and reactions.txt readers
pub mod load_from_file;
/// rendering of floats in the output files
pub mod number_format;
/// text and savetxt-like matrix writers
pub mod save_to_file;
