//! Translation catalog
//!
//! All user-facing UI strings for the supported locales, embedded as a
//! compile-time static table. Each locale carries one [`TranslationBundle`]
//! whose sections mirror the app's feature areas. Because bundles are
//! structs rather than string-keyed maps, every locale necessarily carries
//! the complete field set; a missing translation is a compile error, not a
//! runtime hole.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`LanguageCode`]
//! 2. Add arms to `code()` and `from_code()`
//! 3. Add the entry to `LanguageCode::all()` and `available_languages()`
//! 4. Create a `static XX_YY: TranslationBundle` below and add it to the
//!    match in [`bundle_for`]

use serde::{Deserialize, Serialize};

/// Supported UI languages, as BCP 47 tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en-IN")]
    EnIn,
    #[serde(rename = "hi-IN")]
    HiIn,
    #[serde(rename = "mr-IN")]
    MrIn,
}

impl LanguageCode {
    /// Wire/storage form of this language code.
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::EnIn => "en-IN",
            LanguageCode::HiIn => "hi-IN",
            LanguageCode::MrIn => "mr-IN",
        }
    }

    /// Parse a stored code into a supported language.
    ///
    /// Exact match only; returns `None` for anything unrecognized.
    pub fn from_code(code: &str) -> Option<LanguageCode> {
        match code {
            "en-IN" => Some(LanguageCode::EnIn),
            "hi-IN" => Some(LanguageCode::HiIn),
            "mr-IN" => Some(LanguageCode::MrIn),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [LanguageCode] {
        &[LanguageCode::EnIn, LanguageCode::HiIn, LanguageCode::MrIn]
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        LanguageCode::EnIn
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Display metadata for a selectable language
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LanguageInfo {
    pub code: LanguageCode,
    pub name: &'static str,
    pub native_name: &'static str,
}

/// Languages offered by the language picker, in display order.
pub fn available_languages() -> &'static [LanguageInfo] {
    &[
        LanguageInfo {
            code: LanguageCode::EnIn,
            name: "English",
            native_name: "English",
        },
        LanguageInfo {
            code: LanguageCode::HiIn,
            name: "Hindi",
            native_name: "हिन्दी",
        },
        LanguageInfo {
            code: LanguageCode::MrIn,
            name: "Marathi",
            native_name: "मराठी",
        },
    ]
}

/// Strings for the home screen
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub scan_button: &'static str,
    pub clinics_button: &'static str,
    pub teleconsult_button: &'static str,
    pub scan_description: &'static str,
    pub clinics_description: &'static str,
    pub teleconsult_description: &'static str,
}

/// Strings shared across screens
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonStrings {
    pub language: &'static str,
    pub persona: &'static str,
    pub settings: &'static str,
    pub help: &'static str,
    pub back: &'static str,
    pub next: &'static str,
    pub skip: &'static str,
    pub r#continue: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
}

/// Strings for the voice input overlay
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceStrings {
    pub tap_mic: &'static str,
    pub listening: &'static str,
    pub processing: &'static str,
    pub not_understood: &'static str,
    pub mic_permission: &'static str,
}

/// Strings for the scan flow
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStrings {
    pub title: &'static str,
    pub select_mode: &'static str,
    pub mode360: &'static str,
    pub mode_image: &'static str,
    pub mode_offline: &'static str,
    pub capturing: &'static str,
    pub analyzing: &'static str,
}

/// Strings for the results screen
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsStrings {
    pub title: &'static str,
    pub severity: &'static str,
    pub recommendations: &'static str,
    pub conditions: &'static str,
    pub heatmap: &'static str,
    pub save_to_blockchain: &'static str,
    pub find_clinic: &'static str,
}

/// Strings for the clinic finder
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicsStrings {
    pub title: &'static str,
    pub find_nearby: &'static str,
    pub distance: &'static str,
    pub crowd_level: &'static str,
    pub price: &'static str,
    pub navigate: &'static str,
    pub call: &'static str,
    pub whatsapp: &'static str,
}

/// Strings for teleconsultation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeleconsultStrings {
    pub title: &'static str,
    pub start_session: &'static str,
    pub connecting: &'static str,
    pub share_results: &'static str,
    pub chat: &'static str,
}

/// Strings for the progress tracker
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStrings {
    pub title: &'static str,
    pub smile_score: &'static str,
    pub coins: &'static str,
    pub streak: &'static str,
    pub milestones: &'static str,
}

/// Complete set of UI strings for one locale
#[derive(Debug, Clone, Serialize)]
pub struct TranslationBundle {
    pub home: HomeStrings,
    pub common: CommonStrings,
    pub voice: VoiceStrings,
    pub scan: ScanStrings,
    pub results: ResultsStrings,
    pub clinics: ClinicsStrings,
    pub teleconsult: TeleconsultStrings,
    pub progress: ProgressStrings,
}

static EN_IN: TranslationBundle = TranslationBundle {
    home: HomeStrings {
        title: "ArogyaSmile",
        subtitle: "Your Voice. Your Language. Your Oral Health Companion.",
        scan_button: "Scan Mouth",
        clinics_button: "Find Dentist",
        teleconsult_button: "Video Consult",
        scan_description: "Check your oral health with AI",
        clinics_description: "Locate nearby dental clinics",
        teleconsult_description: "Talk to a dentist online",
    },
    common: CommonStrings {
        language: "Language",
        persona: "Persona",
        settings: "Settings",
        help: "Help",
        back: "Back",
        next: "Next",
        skip: "Skip",
        r#continue: "Continue",
        confirm: "Confirm",
        cancel: "Cancel",
        loading: "Loading...",
        error: "Something went wrong",
        success: "Success!",
        warning: "Warning",
        info: "Information",
    },
    voice: VoiceStrings {
        tap_mic: "Tap the microphone to speak",
        listening: "Listening...",
        processing: "Processing your request...",
        not_understood: "I didn't understand that. Try again.",
        mic_permission: "Allow microphone access to use voice commands",
    },
    scan: ScanStrings {
        title: "Oral Health Scan",
        select_mode: "Choose how to scan",
        mode360: "360° Guided Scan",
        mode_image: "Upload Image",
        mode_offline: "Quick Offline Scan",
        capturing: "Capturing image...",
        analyzing: "Analyzing your mouth...",
    },
    results: ResultsStrings {
        title: "Scan Results",
        severity: "Severity",
        recommendations: "Recommendations",
        conditions: "Conditions Found",
        heatmap: "View Heatmap",
        save_to_blockchain: "Save to Blockchain",
        find_clinic: "Find Nearby Clinic",
    },
    clinics: ClinicsStrings {
        title: "Nearby Clinics",
        find_nearby: "Search clinics near me",
        distance: "Distance",
        crowd_level: "Busy Level",
        price: "Price Range",
        navigate: "Navigate",
        call: "Call",
        whatsapp: "WhatsApp",
    },
    teleconsult: TeleconsultStrings {
        title: "Video Consultation",
        start_session: "Start Video Call",
        connecting: "Connecting to doctor...",
        share_results: "Share Results",
        chat: "Chat",
    },
    progress: ProgressStrings {
        title: "My Progress",
        smile_score: "Smile Score",
        coins: "Coins Earned",
        streak: "Brush Streak",
        milestones: "Milestones",
    },
};

static HI_IN: TranslationBundle = TranslationBundle {
    home: HomeStrings {
        title: "आरोग्यस्मिट",
        subtitle: "आपकी आवाज़। आपकी भाषा। आपके दांतों की देखभाल का साथी।",
        scan_button: "मुँह स्कैन करें",
        clinics_button: "दंत चिकित्सक खोजें",
        teleconsult_button: "वीडियो सलाह",
        scan_description: "AI से अपने दांतों की जांच करें",
        clinics_description: "पास के दंत चिकित्सकों को खोजें",
        teleconsult_description: "ऑनलाइन डॉक्टर से बात करें",
    },
    common: CommonStrings {
        language: "भाषा",
        persona: "व्यक्तित्व",
        settings: "सेटिंग",
        help: "मदद",
        back: "पीछे",
        next: "आगे",
        skip: "छोड़ें",
        r#continue: "जारी रखें",
        confirm: "पुष्टि करें",
        cancel: "रद्द करें",
        loading: "लोड हो रहा है...",
        error: "कुछ गलत हो गया",
        success: "सफल!",
        warning: "चेतावनी",
        info: "जानकारी",
    },
    voice: VoiceStrings {
        tap_mic: "बात करने के लिए माइक्रोफोन को टैप करें",
        listening: "सुन रहा हूँ...",
        processing: "आपके अनुरोध को संसाधित किया जा रहा है...",
        not_understood: "मुझे समझ नहीं आया। फिर से कोशिश करें।",
        mic_permission: "वॉयस कमांड का उपयोग करने के लिए माइक्रोफोन तक पहुँच दें",
    },
    scan: ScanStrings {
        title: "दांतों की जांच",
        select_mode: "स्कैन करने का तरीका चुनें",
        mode360: "360° निर्देशित स्कैन",
        mode_image: "तस्वीर अपलोड करें",
        mode_offline: "तेज़ ऑफ़लाइन स्कैन",
        capturing: "तस्वीर ली जा रही है...",
        analyzing: "आपके दांतों का विश्लेषण किया जा रहा है...",
    },
    results: ResultsStrings {
        title: "स्कैन के परिणाम",
        severity: "गंभीरता",
        recommendations: "सिफारिशें",
        conditions: "पाई गई समस्याएं",
        heatmap: "हीटमैप देखें",
        save_to_blockchain: "ब्लॉकचेन को सहेजें",
        find_clinic: "पास की क्लिनिक खोजें",
    },
    clinics: ClinicsStrings {
        title: "पास की क्लिनिकें",
        find_nearby: "पास की क्लिनिकें खोजें",
        distance: "दूरी",
        crowd_level: "भीड़ का स्तर",
        price: "कीमत की सीमा",
        navigate: "निर्देशन",
        call: "कॉल करें",
        whatsapp: "व्हाट्सएप",
    },
    teleconsult: TeleconsultStrings {
        title: "वीडियो परामर्श",
        start_session: "वीडियो कॉल शुरू करें",
        connecting: "डॉक्टर से जुड़ा जा रहा है...",
        share_results: "परिणाम साझा करें",
        chat: "चैट",
    },
    progress: ProgressStrings {
        title: "मेरी प्रगति",
        smile_score: "स्मिल स्कोर",
        coins: "अर्जित सिक्के",
        streak: "ब्रश स्ट्रीक",
        milestones: "मील के पत्थर",
    },
};

static MR_IN: TranslationBundle = TranslationBundle {
    home: HomeStrings {
        title: "आरोग्यस्मिल",
        subtitle: "तुमचा आवाज़. तुमची भाषा. तुमच्या दातांचा साथी.",
        scan_button: "तोंड स्कॅन करा",
        clinics_button: "दंतचिकित्सक शोधा",
        teleconsult_button: "व्हिडिओ सल्ला",
        scan_description: "AI द्वारे आपल्या दातांची तपासणी करा",
        clinics_description: "जवळपास दंत चिकित्सकांना शोधा",
        teleconsult_description: "ऑनलाइन डॉक्टरशी बोला",
    },
    common: CommonStrings {
        language: "भाषा",
        persona: "व्यक्तिमत्व",
        settings: "सेटिंग्ज",
        help: "मदत",
        back: "मागे",
        next: "पुढे",
        skip: "सोडा",
        r#continue: "सुरू ठेवा",
        confirm: "पुष्टी करा",
        cancel: "रद्द करा",
        loading: "लोड होत आहे...",
        error: "काहीतरी चूक झाली",
        success: "यशस्वी!",
        warning: "सावधानी",
        info: "माहिती",
    },
    voice: VoiceStrings {
        tap_mic: "बोलण्यासाठी मायक्रोफोन टॅप करा",
        listening: "ऐकत आहे...",
        processing: "तुमच्या विनंतीवर कार्य केले जात आहे...",
        not_understood: "मला समजलं नाही. पुन्हा प्रयत्न करा.",
        mic_permission: "व्हॉयस कमांड वापरण्यासाठी मायक्रोफोन अनुमती द्या",
    },
    scan: ScanStrings {
        title: "दातांची तपासणी",
        select_mode: "स्कॅन करण्याचा मार्ग निवडा",
        mode360: "360° निर्देशित स्कॅन",
        mode_image: "चित्र अपलोड करा",
        mode_offline: "त्वरित ऑफलाइन स्कॅन",
        capturing: "चित्र घेतले जात आहे...",
        analyzing: "तुमच्या दातांचे विश्लेषण केले जात आहे...",
    },
    results: ResultsStrings {
        title: "स्कॅन परिणाम",
        severity: "गंभीरता",
        recommendations: "सूचना",
        conditions: "सापडलेल्या समस्या",
        heatmap: "हीटमॅप पहा",
        save_to_blockchain: "ब्लॉकचेनवर जतन करा",
        find_clinic: "जवळपास क्लिनिक शोधा",
    },
    clinics: ClinicsStrings {
        title: "जवळपास क्लिनिकांनी",
        find_nearby: "जवळपास क्लिनिकांचा शोध घ्या",
        distance: "अंतर",
        crowd_level: "भिडीचे स्तर",
        price: "किंमत श्रेणी",
        navigate: "दिशानिर्देश",
        call: "कॉल करा",
        whatsapp: "व्हाट्सअँप",
    },
    teleconsult: TeleconsultStrings {
        title: "व्हिडिओ सल्ला",
        start_session: "व्हिडिओ कॉल सुरू करा",
        connecting: "डॉक्टरला जोडले जात आहे...",
        share_results: "परिणाम शेअर करा",
        chat: "गप्पा",
    },
    progress: ProgressStrings {
        title: "माझी प्रगती",
        smile_score: "स्मिल स्कोर",
        coins: "कमावलेले नाणे",
        streak: "ब्रश स्ट्रीक",
        milestones: "मैलस्तंभ",
    },
};

/// Bundle for a known language.
pub fn bundle_for(lang: LanguageCode) -> &'static TranslationBundle {
    match lang {
        LanguageCode::EnIn => &EN_IN,
        LanguageCode::HiIn => &HI_IN,
        LanguageCode::MrIn => &MR_IN,
    }
}

/// Resolve a stored language code to its bundle.
///
/// Total function: an empty, corrupted, or otherwise unrecognized code
/// resolves to the en-IN bundle rather than failing.
pub fn resolve(code: &str) -> &'static TranslationBundle {
    match LanguageCode::from_code(code) {
        Some(lang) => bundle_for(lang),
        None => &EN_IN,
    }
}
