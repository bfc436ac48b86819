// Generated from UCD 14.0.0 Blocks.txt; names are pre-canonicalized
// (ASCII lowercase, whitespace/underscores/hyphens removed) and sorted
// so lookups can binary-search. Regenerate rather than editing.

pub(crate) const BLOCKS: &[(&str, u32, u32)] = &[
    ("adlam", 0x1E900, 0x1E95F),
    ("aegeannumbers", 0x10100, 0x1013F),
    ("ahom", 0x11700, 0x1174F),
    ("alchemicalsymbols", 0x1F700, 0x1F77F),
    ("alphabeticpresentationforms", 0xFB00, 0xFB4F),
    ("anatolianhieroglyphs", 0x14400, 0x1467F),
    ("ancientgreekmusicalnotation", 0x1D200, 0x1D24F),
    ("ancientgreeknumbers", 0x10140, 0x1018F),
    ("ancientsymbols", 0x10190, 0x101CF),
    ("arabic", 0x0600, 0x06FF),
    ("arabicextendeda", 0x08A0, 0x08FF),
    ("arabicextendedb", 0x0870, 0x089F),
    ("arabicmathematicalalphabeticsymbols", 0x1EE00, 0x1EEFF),
    ("arabicpresentationformsa", 0xFB50, 0xFDFF),
    ("arabicpresentationformsb", 0xFE70, 0xFEFF),
    ("arabicsupplement", 0x0750, 0x077F),
    ("armenian", 0x0530, 0x058F),
    ("arrows", 0x2190, 0x21FF),
    ("avestan", 0x10B00, 0x10B3F),
    ("balinese", 0x1B00, 0x1B7F),
    ("bamum", 0xA6A0, 0xA6FF),
    ("bamumsupplement", 0x16800, 0x16A3F),
    ("basiclatin", 0x0000, 0x007F),
    ("bassavah", 0x16AD0, 0x16AFF),
    ("batak", 0x1BC0, 0x1BFF),
    ("bengali", 0x0980, 0x09FF),
    ("bhaiksuki", 0x11C00, 0x11C6F),
    ("blockelements", 0x2580, 0x259F),
    ("bopomofo", 0x3100, 0x312F),
    ("bopomofoextended", 0x31A0, 0x31BF),
    ("boxdrawing", 0x2500, 0x257F),
    ("brahmi", 0x11000, 0x1107F),
    ("braillepatterns", 0x2800, 0x28FF),
    ("buginese", 0x1A00, 0x1A1F),
    ("buhid", 0x1740, 0x175F),
    ("byzantinemusicalsymbols", 0x1D000, 0x1D0FF),
    ("carian", 0x102A0, 0x102DF),
    ("caucasianalbanian", 0x10530, 0x1056F),
    ("chakma", 0x11100, 0x1114F),
    ("cham", 0xAA00, 0xAA5F),
    ("cherokee", 0x13A0, 0x13FF),
    ("cherokeesupplement", 0xAB70, 0xABBF),
    ("chesssymbols", 0x1FA00, 0x1FA6F),
    ("chorasmian", 0x10FB0, 0x10FDF),
    ("cjkcompatibility", 0x3300, 0x33FF),
    ("cjkcompatibilityforms", 0xFE30, 0xFE4F),
    ("cjkcompatibilityideographs", 0xF900, 0xFAFF),
    ("cjkcompatibilityideographssupplement", 0x2F800, 0x2FA1F),
    ("cjkradicalssupplement", 0x2E80, 0x2EFF),
    ("cjkstrokes", 0x31C0, 0x31EF),
    ("cjksymbolsandpunctuation", 0x3000, 0x303F),
    ("cjkunifiedideographs", 0x4E00, 0x9FFF),
    ("cjkunifiedideographsextensiona", 0x3400, 0x4DBF),
    ("cjkunifiedideographsextensionb", 0x20000, 0x2A6DF),
    ("cjkunifiedideographsextensionc", 0x2A700, 0x2B73F),
    ("cjkunifiedideographsextensiond", 0x2B740, 0x2B81F),
    ("cjkunifiedideographsextensione", 0x2B820, 0x2CEAF),
    ("cjkunifiedideographsextensionf", 0x2CEB0, 0x2EBEF),
    ("cjkunifiedideographsextensiong", 0x30000, 0x3134F),
    ("combiningdiacriticalmarks", 0x0300, 0x036F),
    ("combiningdiacriticalmarksextended", 0x1AB0, 0x1AFF),
    ("combiningdiacriticalmarksforsymbols", 0x20D0, 0x20FF),
    ("combiningdiacriticalmarkssupplement", 0x1DC0, 0x1DFF),
    ("combininghalfmarks", 0xFE20, 0xFE2F),
    ("commonindicnumberforms", 0xA830, 0xA83F),
    ("controlpictures", 0x2400, 0x243F),
    ("coptic", 0x2C80, 0x2CFF),
    ("copticepactnumbers", 0x102E0, 0x102FF),
    ("countingrodnumerals", 0x1D360, 0x1D37F),
    ("cuneiform", 0x12000, 0x123FF),
    ("cuneiformnumbersandpunctuation", 0x12400, 0x1247F),
    ("currencysymbols", 0x20A0, 0x20CF),
    ("cypriotsyllabary", 0x10800, 0x1083F),
    ("cyprominoan", 0x12F90, 0x12FFF),
    ("cyrillic", 0x0400, 0x04FF),
    ("cyrillicextendeda", 0x2DE0, 0x2DFF),
    ("cyrillicextendedb", 0xA640, 0xA69F),
    ("cyrillicextendedc", 0x1C80, 0x1C8F),
    ("cyrillicsupplement", 0x0500, 0x052F),
    ("deseret", 0x10400, 0x1044F),
    ("devanagari", 0x0900, 0x097F),
    ("devanagariextended", 0xA8E0, 0xA8FF),
    ("dingbats", 0x2700, 0x27BF),
    ("divesakuru", 0x11900, 0x1195F),
    ("dogra", 0x11800, 0x1184F),
    ("dominotiles", 0x1F030, 0x1F09F),
    ("duployan", 0x1BC00, 0x1BC9F),
    ("earlydynasticcuneiform", 0x12480, 0x1254F),
    ("egyptianhieroglyphformatcontrols", 0x13430, 0x1343F),
    ("egyptianhieroglyphs", 0x13000, 0x1342F),
    ("elbasan", 0x10500, 0x1052F),
    ("elymaic", 0x10FE0, 0x10FFF),
    ("emoticons", 0x1F600, 0x1F64F),
    ("enclosedalphanumerics", 0x2460, 0x24FF),
    ("enclosedalphanumericsupplement", 0x1F100, 0x1F1FF),
    ("enclosedcjklettersandmonths", 0x3200, 0x32FF),
    ("enclosedideographicsupplement", 0x1F200, 0x1F2FF),
    ("ethiopic", 0x1200, 0x137F),
    ("ethiopicextended", 0x2D80, 0x2DDF),
    ("ethiopicextendeda", 0xAB00, 0xAB2F),
    ("ethiopicextendedb", 0x1E7E0, 0x1E7FF),
    ("ethiopicsupplement", 0x1380, 0x139F),
    ("generalpunctuation", 0x2000, 0x206F),
    ("geometricshapes", 0x25A0, 0x25FF),
    ("geometricshapesextended", 0x1F780, 0x1F7FF),
    ("georgian", 0x10A0, 0x10FF),
    ("georgianextended", 0x1C90, 0x1CBF),
    ("georgiansupplement", 0x2D00, 0x2D2F),
    ("glagolitic", 0x2C00, 0x2C5F),
    ("glagoliticsupplement", 0x1E000, 0x1E02F),
    ("gothic", 0x10330, 0x1034F),
    ("grantha", 0x11300, 0x1137F),
    ("greekandcoptic", 0x0370, 0x03FF),
    ("greekextended", 0x1F00, 0x1FFF),
    ("gujarati", 0x0A80, 0x0AFF),
    ("gunjalagondi", 0x11D60, 0x11DAF),
    ("gurmukhi", 0x0A00, 0x0A7F),
    ("halfwidthandfullwidthforms", 0xFF00, 0xFFEF),
    ("hangulcompatibilityjamo", 0x3130, 0x318F),
    ("hanguljamo", 0x1100, 0x11FF),
    ("hanguljamoextendeda", 0xA960, 0xA97F),
    ("hanguljamoextendedb", 0xD7B0, 0xD7FF),
    ("hangulsyllables", 0xAC00, 0xD7AF),
    ("hanifirohingya", 0x10D00, 0x10D3F),
    ("hanunoo", 0x1720, 0x173F),
    ("hatran", 0x108E0, 0x108FF),
    ("hebrew", 0x0590, 0x05FF),
    ("highprivateusesurrogates", 0xDB80, 0xDBFF),
    ("highsurrogates", 0xD800, 0xDB7F),
    ("hiragana", 0x3040, 0x309F),
    ("ideographicdescriptioncharacters", 0x2FF0, 0x2FFF),
    ("ideographicsymbolsandpunctuation", 0x16FE0, 0x16FFF),
    ("imperialaramaic", 0x10840, 0x1085F),
    ("indicsiyaqnumbers", 0x1EC70, 0x1ECBF),
    ("inscriptionalpahlavi", 0x10B60, 0x10B7F),
    ("inscriptionalparthian", 0x10B40, 0x10B5F),
    ("ipaextensions", 0x0250, 0x02AF),
    ("javanese", 0xA980, 0xA9DF),
    ("kaithi", 0x11080, 0x110CF),
    ("kanaextendeda", 0x1B100, 0x1B12F),
    ("kanaextendedb", 0x1AFF0, 0x1AFFF),
    ("kanasupplement", 0x1B000, 0x1B0FF),
    ("kanbun", 0x3190, 0x319F),
    ("kangxiradicals", 0x2F00, 0x2FDF),
    ("kannada", 0x0C80, 0x0CFF),
    ("katakana", 0x30A0, 0x30FF),
    ("katakanaphoneticextensions", 0x31F0, 0x31FF),
    ("kayahli", 0xA900, 0xA92F),
    ("kharoshthi", 0x10A00, 0x10A5F),
    ("khitansmallscript", 0x18B00, 0x18CFF),
    ("khmer", 0x1780, 0x17FF),
    ("khmersymbols", 0x19E0, 0x19FF),
    ("khojki", 0x11200, 0x1124F),
    ("khudawadi", 0x112B0, 0x112FF),
    ("lao", 0x0E80, 0x0EFF),
    ("latin1supplement", 0x0080, 0x00FF),
    ("latinextendeda", 0x0100, 0x017F),
    ("latinextendedadditional", 0x1E00, 0x1EFF),
    ("latinextendedb", 0x0180, 0x024F),
    ("latinextendedc", 0x2C60, 0x2C7F),
    ("latinextendedd", 0xA720, 0xA7FF),
    ("latinextendede", 0xAB30, 0xAB6F),
    ("latinextendedf", 0x10780, 0x107BF),
    ("latinextendedg", 0x1DF00, 0x1DFFF),
    ("lepcha", 0x1C00, 0x1C4F),
    ("letterlikesymbols", 0x2100, 0x214F),
    ("limbu", 0x1900, 0x194F),
    ("lineara", 0x10600, 0x1077F),
    ("linearbideograms", 0x10080, 0x100FF),
    ("linearbsyllabary", 0x10000, 0x1007F),
    ("lisu", 0xA4D0, 0xA4FF),
    ("lisusupplement", 0x11FB0, 0x11FBF),
    ("lowsurrogates", 0xDC00, 0xDFFF),
    ("lycian", 0x10280, 0x1029F),
    ("lydian", 0x10920, 0x1093F),
    ("mahajani", 0x11150, 0x1117F),
    ("mahjongtiles", 0x1F000, 0x1F02F),
    ("makasar", 0x11EE0, 0x11EFF),
    ("malayalam", 0x0D00, 0x0D7F),
    ("mandaic", 0x0840, 0x085F),
    ("manichaean", 0x10AC0, 0x10AFF),
    ("marchen", 0x11C70, 0x11CBF),
    ("masaramgondi", 0x11D00, 0x11D5F),
    ("mathematicalalphanumericsymbols", 0x1D400, 0x1D7FF),
    ("mathematicaloperators", 0x2200, 0x22FF),
    ("mayannumerals", 0x1D2E0, 0x1D2FF),
    ("medefaidrin", 0x16E40, 0x16E9F),
    ("meeteimayek", 0xABC0, 0xABFF),
    ("meeteimayekextensions", 0xAAE0, 0xAAFF),
    ("mendekikakui", 0x1E800, 0x1E8DF),
    ("meroiticcursive", 0x109A0, 0x109FF),
    ("meroitichieroglyphs", 0x10980, 0x1099F),
    ("miao", 0x16F00, 0x16F9F),
    ("miscellaneousmathematicalsymbolsa", 0x27C0, 0x27EF),
    ("miscellaneousmathematicalsymbolsb", 0x2980, 0x29FF),
    ("miscellaneoussymbols", 0x2600, 0x26FF),
    ("miscellaneoussymbolsandarrows", 0x2B00, 0x2BFF),
    ("miscellaneoussymbolsandpictographs", 0x1F300, 0x1F5FF),
    ("miscellaneoustechnical", 0x2300, 0x23FF),
    ("modi", 0x11600, 0x1165F),
    ("modifiertoneletters", 0xA700, 0xA71F),
    ("mongolian", 0x1800, 0x18AF),
    ("mongoliansupplement", 0x11660, 0x1167F),
    ("mro", 0x16A40, 0x16A6F),
    ("multani", 0x11280, 0x112AF),
    ("musicalsymbols", 0x1D100, 0x1D1FF),
    ("myanmar", 0x1000, 0x109F),
    ("myanmarextendeda", 0xAA60, 0xAA7F),
    ("myanmarextendedb", 0xA9E0, 0xA9FF),
    ("nabataean", 0x10880, 0x108AF),
    ("nandinagari", 0x119A0, 0x119FF),
    ("newa", 0x11400, 0x1147F),
    ("newtailue", 0x1980, 0x19DF),
    ("nko", 0x07C0, 0x07FF),
    ("numberforms", 0x2150, 0x218F),
    ("nushu", 0x1B170, 0x1B2FF),
    ("nyiakengpuachuehmong", 0x1E100, 0x1E14F),
    ("ogham", 0x1680, 0x169F),
    ("olchiki", 0x1C50, 0x1C7F),
    ("oldhungarian", 0x10C80, 0x10CFF),
    ("olditalic", 0x10300, 0x1032F),
    ("oldnortharabian", 0x10A80, 0x10A9F),
    ("oldpermic", 0x10350, 0x1037F),
    ("oldpersian", 0x103A0, 0x103DF),
    ("oldsogdian", 0x10F00, 0x10F2F),
    ("oldsoutharabian", 0x10A60, 0x10A7F),
    ("oldturkic", 0x10C00, 0x10C4F),
    ("olduyghur", 0x10F70, 0x10FAF),
    ("opticalcharacterrecognition", 0x2440, 0x245F),
    ("oriya", 0x0B00, 0x0B7F),
    ("ornamentaldingbats", 0x1F650, 0x1F67F),
    ("osage", 0x104B0, 0x104FF),
    ("osmanya", 0x10480, 0x104AF),
    ("ottomansiyaqnumbers", 0x1ED00, 0x1ED4F),
    ("pahawhhmong", 0x16B00, 0x16B8F),
    ("palmyrene", 0x10860, 0x1087F),
    ("paucinhau", 0x11AC0, 0x11AFF),
    ("phagspa", 0xA840, 0xA87F),
    ("phaistosdisc", 0x101D0, 0x101FF),
    ("phoenician", 0x10900, 0x1091F),
    ("phoneticextensions", 0x1D00, 0x1D7F),
    ("phoneticextensionssupplement", 0x1D80, 0x1DBF),
    ("playingcards", 0x1F0A0, 0x1F0FF),
    ("privateusearea", 0xE000, 0xF8FF),
    ("psalterpahlavi", 0x10B80, 0x10BAF),
    ("rejang", 0xA930, 0xA95F),
    ("ruminumeralsymbols", 0x10E60, 0x10E7F),
    ("runic", 0x16A0, 0x16FF),
    ("samaritan", 0x0800, 0x083F),
    ("saurashtra", 0xA880, 0xA8DF),
    ("sharada", 0x11180, 0x111DF),
    ("shavian", 0x10450, 0x1047F),
    ("shorthandformatcontrols", 0x1BCA0, 0x1BCAF),
    ("siddham", 0x11580, 0x115FF),
    ("sinhala", 0x0D80, 0x0DFF),
    ("sinhalaarchaicnumbers", 0x111E0, 0x111FF),
    ("smallformvariants", 0xFE50, 0xFE6F),
    ("smallkanaextension", 0x1B130, 0x1B16F),
    ("sogdian", 0x10F30, 0x10F6F),
    ("sorasompeng", 0x110D0, 0x110FF),
    ("soyombo", 0x11A50, 0x11AAF),
    ("spacingmodifierletters", 0x02B0, 0x02FF),
    ("specials", 0xFFF0, 0xFFFF),
    ("sundanese", 0x1B80, 0x1BBF),
    ("sundanesesupplement", 0x1CC0, 0x1CCF),
    ("superscriptsandsubscripts", 0x2070, 0x209F),
    ("supplementalarrowsa", 0x27F0, 0x27FF),
    ("supplementalarrowsb", 0x2900, 0x297F),
    ("supplementalarrowsc", 0x1F800, 0x1F8FF),
    ("supplementalmathematicaloperators", 0x2A00, 0x2AFF),
    ("supplementalpunctuation", 0x2E00, 0x2E7F),
    ("supplementalsymbolsandpictographs", 0x1F900, 0x1F9FF),
    ("supplementaryprivateuseareaa", 0xF0000, 0xFFFFF),
    ("supplementaryprivateuseareab", 0x100000, 0x10FFFF),
    ("suttonsignwriting", 0x1D800, 0x1DAAF),
    ("sylotinagri", 0xA800, 0xA82F),
    ("symbolsandpictographsextendeda", 0x1FA70, 0x1FAFF),
    ("symbolsforlegacycomputing", 0x1FB00, 0x1FBFF),
    ("syriac", 0x0700, 0x074F),
    ("syriacsupplement", 0x0860, 0x086F),
    ("tagalog", 0x1700, 0x171F),
    ("tagbanwa", 0x1760, 0x177F),
    ("tags", 0xE0000, 0xE007F),
    ("taile", 0x1950, 0x197F),
    ("taitham", 0x1A20, 0x1AAF),
    ("taiviet", 0xAA80, 0xAADF),
    ("taixuanjingsymbols", 0x1D300, 0x1D35F),
    ("takri", 0x11680, 0x116CF),
    ("tamil", 0x0B80, 0x0BFF),
    ("tamilsupplement", 0x11FC0, 0x11FFF),
    ("tangsa", 0x16A70, 0x16ACF),
    ("tangut", 0x17000, 0x187FF),
    ("tangutcomponents", 0x18800, 0x18AFF),
    ("tangutsupplement", 0x18D00, 0x18D7F),
    ("telugu", 0x0C00, 0x0C7F),
    ("thaana", 0x0780, 0x07BF),
    ("thai", 0x0E00, 0x0E7F),
    ("tibetan", 0x0F00, 0x0FFF),
    ("tifinagh", 0x2D30, 0x2D7F),
    ("tirhuta", 0x11480, 0x114DF),
    ("toto", 0x1E290, 0x1E2BF),
    ("transportandmapsymbols", 0x1F680, 0x1F6FF),
    ("ugaritic", 0x10380, 0x1039F),
    ("unifiedcanadianaboriginalsyllabics", 0x1400, 0x167F),
    ("unifiedcanadianaboriginalsyllabicsextended", 0x18B0, 0x18FF),
    ("unifiedcanadianaboriginalsyllabicsextendeda", 0x11AB0, 0x11ABF),
    ("vai", 0xA500, 0xA63F),
    ("variationselectors", 0xFE00, 0xFE0F),
    ("variationselectorssupplement", 0xE0100, 0xE01EF),
    ("vedicextensions", 0x1CD0, 0x1CFF),
    ("verticalforms", 0xFE10, 0xFE1F),
    ("vithkuqi", 0x10570, 0x105BF),
    ("wancho", 0x1E2C0, 0x1E2FF),
    ("warangciti", 0x118A0, 0x118FF),
    ("yezidi", 0x10E80, 0x10EBF),
    ("yijinghexagramsymbols", 0x4DC0, 0x4DFF),
    ("yiradicals", 0xA490, 0xA4CF),
    ("yisyllables", 0xA000, 0xA48F),
    ("zanabazarsquare", 0x11A00, 0x11A4F),
    ("znamennymusicalnotation", 0x1CF00, 0x1CFCF),
];
