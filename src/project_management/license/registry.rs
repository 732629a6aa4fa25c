use serde::Serialize;

use crate::shared::error::{ScaffoldError, ScaffoldResult};

/// A license as seen by templates: `Legal.Name`, `Legal.Header`, `Legal.Text`.
///
/// `text` is itself a template body rendered into the LICENSE file with a
/// `copyright` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct License {
    pub name: String,
    pub header: Option<String>,
    pub text: String,
}

impl License {
    pub fn new(name: impl Into<String>, header: Option<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct LicenseEntry {
    id: String,
    aliases: Vec<String>,
    license: License,
}

/// Licenses selectable by id or alias
#[derive(Debug, Clone)]
pub struct LicenseRegistry {
    entries: Vec<LicenseEntry>,
}

impl LicenseRegistry {
    pub fn builtin() -> Self {
        let mut registry = Self { entries: Vec::new() };
        registry.register("none", &["false"], License::new("None", None, ""));
        registry.register(
            "mit",
            &["mit license"],
            License::new("MIT License", Some(spdx_header("MIT")), MIT_TEXT),
        );
        registry.register(
            "isc",
            &["isc license"],
            License::new("ISC License", Some(spdx_header("ISC")), ISC_TEXT),
        );
        registry.register(
            "bsd-2",
            &["freebsd", "simplified bsd license", "bsd-2-clause"],
            License::new("Simplified BSD License", Some(spdx_header("BSD-2-Clause")), BSD2_TEXT),
        );
        registry.register(
            "bsd",
            &["bsd-3", "newbsd", "3 clause bsd", "bsd-3-clause"],
            License::new("NewBSD", Some(spdx_header("BSD-3-Clause")), BSD3_TEXT),
        );
        registry
    }

    /// Add a license; a later registration with the same id shadows earlier ones
    pub fn register(&mut self, id: &str, aliases: &[&str], license: License) {
        self.entries.insert(0, LicenseEntry {
            id: id.to_lowercase(),
            aliases: aliases.iter().map(|a| a.to_lowercase()).collect(),
            license,
        });
    }

    /// Look a license up by id or alias, ignoring case
    pub fn find(&self, key: &str) -> ScaffoldResult<&License> {
        let key = key.trim().to_lowercase();
        self.entries
            .iter()
            .find(|e| e.id == key || e.aliases.iter().any(|a| *a == key))
            .map(|e| &e.license)
            .ok_or_else(|| ScaffoldError::UnknownLicense {
                name: key.clone(),
                available: self.ids().join(", "),
            })
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

fn spdx_header(identifier: &str) -> String {
    format!("SPDX-License-Identifier: {}", identifier)
}

const MIT_TEXT: &str = "The MIT License (MIT)

{{copyright}}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
THE SOFTWARE.
";

const ISC_TEXT: &str = "ISC License

{{copyright}}

Permission to use, copy, modify, and/or distribute this software for any
purpose with or without fee is hereby granted, provided that the above
copyright notice and this permission notice appear in all copies.

THE SOFTWARE IS PROVIDED \"AS IS\" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR
ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN
ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF
OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
";

const BSD2_TEXT: &str = "{{copyright}}

Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are met:

1. Redistributions of source code must retain the above copyright notice,
   this list of conditions and the following disclaimer.

2. Redistributions in binary form must reproduce the above copyright notice,
   this list of conditions and the following disclaimer in the documentation
   and/or other materials provided with the distribution.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS \"AS IS\"
AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
POSSIBILITY OF SUCH DAMAGE.
";

const BSD3_TEXT: &str = "{{copyright}}

Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are met:

1. Redistributions of source code must retain the above copyright notice,
   this list of conditions and the following disclaimer.

2. Redistributions in binary form must reproduce the above copyright notice,
   this list of conditions and the following disclaimer in the documentation
   and/or other materials provided with the distribution.

3. Neither the name of the copyright holder nor the names of its contributors
   may be used to endorse or promote products derived from this software
   without specific prior written permission.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS \"AS IS\"
AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
POSSIBILITY OF SUCH DAMAGE.
";
