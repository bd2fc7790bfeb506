//! The era table, in the order eras are conventionally listed.
//!
//! The Southern Court eras of 1331-1392 are listed before the Northern Court
//! eras of the same period, so the table is not chronological.

japanese_eras! {
    Taika => (645, 7, 17, "大化", "Taika"),
    Hakuchi => (650, 3, 22, "白雉", "Hakuchi"),
    Shucho => (686, 8, 14, "朱鳥", "Shucho"),
    Taiho => (701, 5, 3, "大宝", "Taiho"),
    Keiun => (704, 6, 16, "慶雲", "Keiun"),
    Wado => (708, 2, 7, "和銅", "Wado"),
    Reiki => (715, 10, 3, "霊亀", "Reiki"),
    Yoro => (717, 12, 24, "養老", "Yoro"),
    Jinki => (724, 3, 3, "神亀", "Jinki"),
    Tempyo => (729, 9, 2, "天平", "Tempyo"),
    Tempyokampo => (749, 5, 4, "天平感宝", "Tempyokampo"),
    Tempyoshoho => (749, 8, 19, "天平勝宝", "Tempyoshoho"),
    Tempyohoji => (757, 9, 6, "天平宝字", "Tempyohoji"),
    Tempyojingo => (765, 2, 1, "天平神護", "Tempyojingo"),
    Jingokeiun => (767, 9, 13, "神護景雲", "Jingokeiun"),
    Hoki => (770, 10, 23, "宝亀", "Hoki"),
    Teno => (781, 1, 30, "天応", "Teno"),
    Enryaku => (782, 9, 30, "延暦", "Enryaku"),
    Daido => (806, 6, 8, "大同", "Daido"),
    Konin => (810, 10, 20, "弘仁", "Konin"),
    Tencho => (824, 2, 8, "天長", "Tencho"),
    Jowa834 => (834, 2, 14, "承和", "Jowa"),
    Kasho848 => (848, 7, 16, "嘉祥", "Kasho"),
    Ninju => (851, 6, 1, "仁寿", "Ninju"),
    Saiko => (854, 12, 23, "斉衡", "Saiko"),
    Tenan => (857, 3, 20, "天安", "Tenan"),
    Jogan => (859, 5, 20, "貞観", "Jogan"),
    Gangyo => (877, 6, 1, "元慶", "Gangyo"),
    Ninna => (885, 3, 11, "仁和", "Ninna"),
    Kampyo => (889, 5, 30, "寛平", "Kampyo"),
    Shotai => (898, 5, 20, "昌泰", "Shotai"),
    Engi => (901, 8, 31, "延喜", "Engi"),
    Encho => (923, 5, 29, "延長", "Encho"),
    Johei => (931, 5, 16, "承平", "Johei"),
    Tengyo => (938, 6, 22, "天慶", "Tengyo"),
    Tenryaku => (947, 5, 15, "天暦", "Tenryaku"),
    Tentoku => (957, 11, 21, "天徳", "Tentoku"),
    Owa => (961, 3, 5, "応和", "Owa"),
    Koho => (964, 8, 19, "康保", "Koho"),
    Anna => (968, 9, 8, "安和", "Anna"),
    Tenroku => (970, 5, 3, "天禄", "Tenroku"),
    Tenen => (974, 1, 16, "天延", "Tenen"),
    Jogen976 => (976, 8, 11, "貞元", "Jogen"),
    Tengen => (978, 12, 31, "天元", "Tengen"),
    Eikan => (983, 5, 29, "永観", "Eikan"),
    Kanna => (985, 5, 19, "寛和", "Kanna"),
    Eien => (987, 5, 5, "永延", "Eien"),
    Eiso => (989, 9, 10, "永祚", "Eiso"),
    Shoryaku => (990, 11, 26, "正暦", "Shoryaku"),
    Chotoku => (995, 3, 25, "長徳", "Chotoku"),
    Choho => (999, 2, 1, "長保", "Choho"),
    Kanko => (1004, 8, 8, "寛弘", "Kanko"),
    Chowa => (1013, 2, 8, "長和", "Chowa"),
    Kannin => (1017, 5, 21, "寛仁", "Kannin"),
    Jian => (1021, 3, 17, "治安", "Jian"),
    Manju => (1024, 8, 19, "万寿", "Manju"),
    Chogen => (1028, 8, 18, "長元", "Chogen"),
    Choryaku => (1037, 5, 9, "長暦", "Choryaku"),
    Chokyu => (1040, 12, 16, "長久", "Chokyu"),
    Kantoku => (1044, 12, 16, "寛徳", "Kantoku"),
    Eisho1046 => (1046, 5, 22, "永承", "Eisho"),
    Tenki => (1053, 2, 2, "天喜", "Tenki"),
    Kohei => (1058, 9, 19, "康平", "Kohei"),
    Jiryaku => (1065, 9, 4, "治暦", "Jiryaku"),
    Enkyu => (1069, 5, 6, "延久", "Enkyu"),
    Joho => (1074, 9, 16, "承保", "Joho"),
    Joryaku => (1077, 12, 5, "承暦", "Joryaku"),
    Eiho => (1081, 3, 22, "永保", "Eiho"),
    Otoku => (1084, 3, 15, "応徳", "Otoku"),
    Kanji => (1087, 5, 11, "寛治", "Kanji"),
    Kaho => (1095, 1, 23, "嘉保", "Kaho"),
    Eicho => (1097, 1, 3, "永長", "Eicho"),
    Jotoku => (1097, 12, 27, "承徳", "Jotoku"),
    Kowa1099 => (1099, 9, 15, "康和", "Kowa"),
    Choji => (1104, 3, 8, "長治", "Choji"),
    Kasho => (1106, 5, 13, "嘉承", "Kasho"),
    Tennin => (1108, 9, 9, "天仁", "Tennin"),
    Tenei => (1110, 7, 31, "天永", "Tenei"),
    Eikyu => (1113, 8, 25, "永久", "Eikyu"),
    Genei => (1118, 4, 25, "元永", "Genei"),
    Hoan => (1120, 5, 9, "保安", "Hoan"),
    Tenji => (1124, 5, 18, "天治", "Tenji"),
    Daiji => (1126, 2, 15, "大治", "Daiji"),
    Tensho1131 => (1131, 2, 28, "天承", "Tensho"),
    Chosho => (1132, 9, 21, "長承", "Chosho"),
    Hoen => (1135, 6, 10, "保延", "Hoen"),
    Eiji => (1141, 8, 13, "永治", "Eiji"),
    Koji1142 => (1142, 5, 25, "康治", "Koji"),
    Tenyo => (1144, 3, 28, "天養", "Tenyo"),
    Kyuan => (1145, 8, 12, "久安", "Kyuan"),
    Nimpei => (1151, 2, 14, "仁平", "Nimpei"),
    Kyuju => (1154, 12, 4, "久寿", "Kyuju"),
    Hogen => (1156, 5, 18, "保元", "Hogen"),
    Heiji => (1159, 5, 9, "平治", "Heiji"),
    Eiryaku => (1160, 2, 18, "永暦", "Eiryaku"),
    Oho => (1161, 9, 24, "応保", "Oho"),
    Chokan => (1163, 5, 4, "長寛", "Chokan"),
    Eiman => (1165, 7, 14, "永万", "Eiman"),
    Ninan => (1166, 9, 23, "仁安", "Ninan"),
    Kao => (1169, 5, 6, "嘉応", "Kao"),
    Shoan1171 => (1171, 5, 27, "承安", "Shoan"),
    Angen => (1175, 8, 16, "安元", "Angen"),
    Jisho => (1177, 8, 29, "治承", "Jisho"),
    Yowa => (1181, 8, 25, "養和", "Yowa"),
    Juei => (1182, 6, 29, "寿永", "Juei"),
    Genryaku => (1184, 5, 27, "元暦", "Genryaku"),
    Bunji => (1185, 9, 9, "文治", "Bunji"),
    Kenkyu => (1190, 5, 16, "建久", "Kenkyu"),
    Shoji => (1199, 5, 23, "正治", "Shoji"),
    Kennin => (1201, 3, 19, "建仁", "Kennin"),
    Genkyu => (1204, 3, 23, "元久", "Genkyu"),
    Kenei => (1206, 6, 5, "建永", "Kenei"),
    Jogen => (1207, 11, 16, "承元", "Jogen"),
    Kenryaku => (1211, 4, 23, "建暦", "Kenryaku"),
    Kempo => (1214, 1, 18, "建保", "Kempo"),
    Jokyu => (1219, 5, 27, "承久", "Jokyu"),
    Joo1222 => (1222, 5, 25, "貞応", "Joo"),
    Gennin => (1224, 12, 31, "元仁", "Gennin"),
    Karoku => (1225, 5, 28, "嘉禄", "Karoku"),
    Antei => (1228, 1, 18, "安貞", "Antei"),
    Kanki => (1229, 3, 31, "寛喜", "Kanki"),
    Joei => (1232, 4, 23, "貞永", "Joei"),
    Tempuku => (1233, 5, 25, "天福", "Tempuku"),
    Bunryaku => (1234, 11, 27, "文暦", "Bunryaku"),
    Katei => (1235, 11, 1, "嘉禎", "Katei"),
    Ryakunin => (1238, 12, 30, "暦仁", "Ryakunin"),
    Eno => (1239, 3, 13, "延応", "Eno"),
    Ninji => (1240, 8, 5, "仁治", "Ninji"),
    Kangen => (1243, 3, 18, "寛元", "Kangen"),
    Hoji => (1247, 4, 5, "宝治", "Hoji"),
    Kencho => (1249, 5, 2, "建長", "Kencho"),
    Kogen => (1256, 10, 24, "康元", "Kogen"),
    Shoka => (1257, 3, 31, "正嘉", "Shoka"),
    Shogen => (1259, 4, 20, "正元", "Shogen"),
    Buno => (1260, 5, 24, "文応", "Buno"),
    Kocho => (1261, 3, 22, "弘長", "Kocho"),
    Bunei => (1264, 3, 27, "文永", "Bunei"),
    Kenji => (1275, 5, 22, "建治", "Kenji"),
    Koan1278 => (1278, 3, 23, "弘安", "Koan"),
    Shoo => (1288, 5, 29, "正応", "Shoo"),
    Einin => (1293, 9, 6, "永仁", "Einin"),
    Shoan => (1299, 5, 25, "正安", "Shoan"),
    Kengen => (1302, 12, 10, "乾元", "Kengen"),
    Kagen => (1303, 9, 16, "嘉元", "Kagen"),
    Tokuji => (1307, 1, 18, "徳治", "Tokuji"),
    Enkyo1308 => (1308, 11, 22, "延慶", "Enkyo"),
    Ocho => (1311, 5, 17, "応長", "Ocho"),
    Showa1312 => (1312, 4, 27, "正和", "Showa"),
    Bumpo => (1317, 3, 16, "文保", "Bumpo"),
    Geno => (1319, 5, 18, "元応", "Geno"),
    Genko1321 => (1321, 3, 22, "元亨", "Genko"),
    Shochu => (1324, 12, 25, "正中", "Shochu"),
    Karyaku => (1326, 5, 28, "嘉暦", "Karyaku"),
    Gentoku => (1329, 9, 22, "元徳", "Gentoku"),
    Genko => (1331, 9, 11, "元弘", "Genko"),
    Shokyo => (1332, 5, 23, "正慶", "Shokyo"),
    Kemmu => (1334, 3, 5, "建武", "Kemmu"),
    Engen => (1336, 4, 11, "延元", "Engen"),
    Kokoku => (1340, 5, 25, "興国", "Kokoku"),
    Shohei => (1347, 1, 20, "正平", "Shohei"),
    Kentoku => (1370, 8, 16, "建徳", "Kentoku"),
    Bunchu => (1372, 5, 1, "文中", "Bunchu"),
    Tenju => (1375, 6, 26, "天授", "Tenju"),
    Kowa => (1381, 3, 6, "弘和", "Kowa"),
    Genchu => (1384, 5, 18, "元中", "Genchu"),
    // Northern Court
    Ryakuo => (1338, 10, 11, "暦応", "Ryakuo"),
    Koei => (1342, 6, 1, "康永", "Koei"),
    Jowa => (1345, 11, 15, "貞和", "Jowa"),
    Kanno => (1350, 4, 4, "観応", "Kanno"),
    Bunna => (1352, 11, 4, "文和", "Bunna"),
    Embun => (1356, 4, 29, "延文", "Embun"),
    Koan => (1361, 5, 4, "康安", "Koan"),
    Joji => (1362, 10, 11, "貞治", "Joji"),
    Oan => (1368, 3, 7, "応安", "Oan"),
    Eiwa => (1375, 3, 29, "永和", "Eiwa"),
    Koryaku => (1379, 4, 9, "康暦", "Koryaku"),
    Eitoku => (1381, 3, 20, "永徳", "Eitoku"),
    Shitoku => (1384, 3, 19, "至徳", "Shitoku"),
    Kakyo => (1387, 10, 5, "嘉慶", "Kakyo"),
    Koo => (1389, 3, 7, "康応", "Koo"),
    Meitoku => (1390, 4, 12, "明徳", "Meitoku"),
    Oei => (1394, 8, 2, "応永", "Oei"),
    Shocho => (1428, 6, 10, "正長", "Shocho"),
    Eikyo => (1429, 10, 3, "永享", "Eikyo"),
    Kakitsu => (1441, 3, 10, "嘉吉", "Kakitsu"),
    Bunan => (1444, 2, 23, "文安", "Bunan"),
    Hotoku => (1449, 8, 16, "宝徳", "Hotoku"),
    Kyotoku => (1452, 8, 10, "享徳", "Kyotoku"),
    Kosho => (1455, 9, 6, "康正", "Kosho"),
    Choroku => (1457, 10, 16, "長禄", "Choroku"),
    Kansho => (1461, 2, 1, "寛正", "Kansho"),
    Bunsho => (1466, 3, 14, "文正", "Bunsho"),
    Onin => (1467, 4, 9, "応仁", "Onin"),
    Bummei => (1469, 6, 8, "文明", "Bummei"),
    Chokyo => (1487, 8, 9, "長享", "Chokyo"),
    Entoku => (1489, 9, 16, "延徳", "Entoku"),
    Meio => (1492, 8, 12, "明応", "Meio"),
    Bunki => (1501, 3, 18, "文亀", "Bunki"),
    Eisho => (1504, 3, 16, "永正", "Eisho"),
    Daiei => (1521, 9, 23, "大永", "Daiei"),
    Kyoroku => (1528, 9, 3, "享禄", "Kyoroku"),
    Tembun => (1532, 8, 29, "天文", "Tembun"),
    Koji => (1555, 11, 7, "弘治", "Koji"),
    Eiroku => (1558, 3, 18, "永禄", "Eiroku"),
    Genki => (1570, 5, 27, "元亀", "Genki"),
    Tensho => (1573, 8, 25, "天正", "Tensho"),
    Bunroku => (1593, 1, 10, "文禄", "Bunroku"),
    Keicho => (1596, 12, 16, "慶長", "Keicho"),
    Genna => (1615, 9, 5, "元和", "Genna"),
    Kanei => (1624, 4, 17, "寛永", "Kanei"),
    Shoho => (1645, 1, 13, "正保", "Shoho"),
    Keian => (1648, 4, 7, "慶安", "Keian"),
    Joo => (1652, 10, 20, "承応", "Joo"),
    Meireki => (1655, 5, 18, "明暦", "Meireki"),
    Manji => (1658, 8, 21, "万治", "Manji"),
    Kambun => (1661, 5, 23, "寛文", "Kambun"),
    Empo => (1673, 10, 30, "延宝", "Empo"),
    Tenna => (1681, 11, 9, "天和", "Tenna"),
    Jokyo => (1684, 4, 5, "貞享", "Jokyo"),
    Genroku => (1688, 10, 23, "元禄", "Genroku"),
    Hoei => (1704, 4, 16, "宝永", "Hoei"),
    Shotoku => (1711, 6, 11, "正徳", "Shotoku"),
    Kyoho => (1716, 8, 9, "享保", "Kyoho"),
    Gembun => (1736, 6, 7, "元文", "Gembun"),
    Kampo => (1741, 4, 12, "寛保", "Kampo"),
    Enkyo => (1744, 4, 3, "延享", "Enkyo"),
    Kanen => (1748, 8, 5, "寛延", "Kanen"),
    Horeki => (1751, 12, 14, "宝暦", "Horeki"),
    Meiwa => (1764, 6, 30, "明和", "Meiwa"),
    Anei => (1772, 12, 10, "安永", "Anei"),
    Temmei => (1781, 4, 25, "天明", "Temmei"),
    Kansei => (1789, 2, 19, "寛政", "Kansei"),
    Kyowa => (1801, 3, 19, "享和", "Kyowa"),
    Bunka => (1804, 3, 22, "文化", "Bunka"),
    Bunsei => (1818, 5, 26, "文政", "Bunsei"),
    Tempo => (1831, 1, 23, "天保", "Tempo"),
    Koka => (1845, 1, 9, "弘化", "Koka"),
    Kaei => (1848, 4, 1, "嘉永", "Kaei"),
    Ansei => (1855, 1, 15, "安政", "Ansei"),
    Manen => (1860, 4, 8, "万延", "Manen"),
    Bunkyu => (1861, 3, 29, "文久", "Bunkyu"),
    Genji => (1864, 3, 27, "元治", "Genji"),
    Keio => (1865, 5, 1, "慶応", "Keio"),
    Meiji => (1868, 1, 25, "明治", "Meiji"),
    Taisho => (1912, 7, 30, "大正", "Taisho"),
    Showa => (1926, 12, 25, "昭和", "Showa"),
    Heisei => (1989, 1, 8, "平成", "Heisei"),
    Reiwa => (2019, 5, 1, "令和", "Reiwa"),
}
