/// Ordered list of tokens reported by the TPM library.
///
/// Lookups are linear scans; the lists are short and order matters for which token wins when
/// several share a prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a comma-separated list, dropping empty pieces.
    pub fn from_comma_list(list: &str) -> Self {
        Self::new(list.split(',').filter(|t| !t.is_empty()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if `needle` is present as a whole token.
    pub fn contains(&self, needle: &str) -> bool {
        self.tokens.iter().any(|t| t == needle)
    }

    /// First token starting with `prefix`.
    pub fn find_prefixed(&self, prefix: &str) -> Option<&str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .find(|t| t.starts_with(prefix))
    }
}

/// Enabled algorithm and key-size statements, e.g. `["rsa", "ecc-min-size=224"]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlgorithmSet(pub TokenList);

/// Requested profile attributes, e.g. `["fips-host"]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeSet(pub TokenList);

macro_rules! token_set {
    ($ty:ident) => {
        impl $ty {
            pub fn new<I, S>(tokens: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                Self(TokenList::new(tokens))
            }

            pub fn from_comma_list(list: &str) -> Self {
                Self(TokenList::from_comma_list(list))
            }
        }

        impl std::ops::Deref for $ty {
            type Target = TokenList;

            fn deref(&self) -> &TokenList {
                &self.0
            }
        }
    };
}

token_set!(AlgorithmSet);
token_set!(AttributeSet);
