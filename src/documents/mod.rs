/*!
 * Document adapters for the supported document families.
 *
 * Adapters are deliberately thin: they extract candidate fragments, hand
 * them to the translation engine, splice the results back verbatim, and
 * rewrite the file. All decision logic lives in the engine. A fragment an
 * adapter cannot handle is logged and skipped; a single bad fragment never
 * aborts a file, and a single bad file never aborts the run.
 *
 * - `array_data`: JavaScript data files built from `new Array(...)` lines;
 *   menu files share this format
 * - `markup`: generated HTML pages
 */

pub use self::array_data::ArrayDataAdapter;
pub use self::markup::MarkupAdapter;

pub mod array_data;
pub mod markup;
