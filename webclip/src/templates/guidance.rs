//! Import guidance written next to the generated templates

/// File name of the guidance document, written at the root
pub const GUIDANCE_FILENAME: &str = "README_IMPORT_GUIDANCE.txt";

/// Instructions for importing the templates into the browser extension
pub const IMPORT_GUIDANCE: &str = r"Obsidian WebClipper Template Import Guidance
=============================================

The following steps will help you import the JSON templates into Obsidian WebClipper:

1. Open your Obsidian Vault in your file explorer. The vault root is the folder you specified when running this script.
2. Within the vault, you will see a “Clippings” folder with various sub-folders (e.g. Summaries, Research, Translations, Articles, Highlights, GitHub, Medium, and Generic) and a central repository folder at Clippings/TEMPLATES.
3. In your web browser (Chrome or compatible), open the Obsidian WebClipper extension settings.
4. Look for the option to “Import Templates” (or similar).
5. When prompted, navigate to the vault root and then drill down to the appropriate subfolder or to Clippings/TEMPLATES to select the JSON template file(s) you wish to import.
6. Follow any on‑screen instructions to complete the import.
7. Once imported, these templates will be available within the WebClipper for creating new notes directly in your Obsidian Vault.

For any questions or troubleshooting, consult the Obsidian WebClipper documentation or support resources.
";
