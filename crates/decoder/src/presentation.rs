//! Derived, non-cryptographic presentation artifacts.
//!
//! Both artifacts returned next to the plaintext are presentation-only:
//! the viewer URL simply embeds the percent-encoded plaintext in a fragment,
//! and [`RECONSTRUCTED_CODE`] is a fixed illustrative snippet that is
//! **not** computed from the decrypted AST. Keep it an explicit constant so
//! nobody mistakes it for parser output.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Default host for the AST viewer link.
pub const DEFAULT_VIEWER_BASE_URL: &str = "https://ts-ast-viewer.com";

/// Percent-encoding set matching JavaScript's `encodeURIComponent`:
/// alphanumerics and `- _ . ! ~ * ' ( )` pass through, everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the viewer link with the plaintext percent-encoded into the URL fragment.
pub fn viewer_url(base: &str, plaintext: &str) -> String {
    format!("{base}/#code/{}", utf8_percent_encode(plaintext, COMPONENT))
}

/// Fixed confirmation string for the success response.
pub const SUCCESS_MESSAGE: &str =
    "Decrypt sukses! Paste decryptedAst ke viewer buat lihat struktur AST lengkap.";

/// Fixed illustrative snippet returned as `reconstructedCode`.
///
/// Independent of the actual input — it sketches the structure a caller
/// would typically find in the decrypted AST (interface, message handler,
/// event listener). The full tree lives behind the viewer URL.
pub const RECONSTRUCTED_CODE: &str = r#"// Rekonstruksi sederhana dari AST serialized (full-nya buka viewerUrl di response)
// Ini contoh berdasarkan struktur AST: interface, function handler, event listener
interface Payload {
  type: 'send';
  payload: string;
}

const handleMessage = (message: Payload): string | null => {
  if (message.type === 'send') {
    // Extract IV dari payload (contoh: slice 0-32 chars untuk hex IV)
    const iv = message.payload.slice(0, 32);
    const key = Buffer.from('4c78bda5675779040a2513e55359da9dc2f62a66c8ba2fd7c3e418f7b6aefd47', 'hex');
    const cipherText = Buffer.from(message.payload, 'base64');

    const decipher = crypto.createDecipheriv('aes-256-cbc', key, Buffer.from(iv, 'hex'));
    let decrypted = decipher.update(cipherText);
    decrypted = Buffer.concat([decrypted, decipher.finalize()]);

    // Unpad PKCS7
    const padLen = decrypted[decrypted.length - 1];
    const unpadded = decrypted.slice(0, -padLen);
    return unpadded.toString('utf8');
  }
  return null;
};

// Event handler untuk window.message (mirip postMessage di browser)
const eventHandler = (event: MessageEvent) => {
  const data = event.data as Payload;
  const result = handleMessage(data);
  if (result) {
    console.log('Decrypted AST processed:', result);
    // Di sini bisa tambah logic parse AST lebih lanjut, e.g., ts.createSourceFile(result, ...)
  }
};

// Setup listener (hanya di browser environment)
if (typeof window !== 'undefined') {
  window.addEventListener('message', eventHandler, false);
}

// Optional: Factory buat generate AST baru pake TypeScript compiler
import * as tsFactory from 'typescript';
const factory = tsFactory.factory;
const sourceFile = factory.createSourceFile(
  ['temp.ts'],
  factory.createExpressionStatement(
    factory.createCallExpression(
      factory.createIdentifier('console.log'),
      undefined,
      [factory.createStringLiteral('Hello from reconstructed AST!')]
    )
  ),
  ts.NodeFlags.None
);
console.log('SourceFile example created:', sourceFile);"#;
